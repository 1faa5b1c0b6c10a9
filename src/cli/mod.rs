mod context;
mod flags;
mod logging;
mod output;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use context::{Context, Stop};

pub use flags::CliFlags;
pub use parse::{ParseError, parse};

pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try --help");
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => ExitCode::SUCCESS,
        Err(Stop::Failed) => ExitCode::FAILURE,
        Err(Stop::Interrupted) => ExitCode::from(crate::exits::INTERRUPTED_EXIT),
    }
}
