use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod harden;

fn main() -> ExitCode {
    harden::disable_core_dumps();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
