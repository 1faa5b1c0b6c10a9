//! Warning, error and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -{count} COPIED TO CLIPBOARD- ***");
    }
}

/// Never suppressed.
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when no clipboard is available. Returns true
/// to fall back to stdout. Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        warn("Clipboard unavailable, printing to terminal");
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn print_help() {
    println!("randclass {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Generates {}-character passwords with at least one lowercase,", randclass::PASSWORD_LENGTH);
    println!("uppercase, digit and special character.");
    println!();
    println!("Usage: randclass [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --number <N>  Number of passwords to generate (default 1)");
    println!("  -b, --board       Copy passwords to the clipboard");
    println!("  -q, --quiet       Suppress warnings and status output");
    println!("  -v, --version     Print version");
    println!("  -h, --help        Print this help");
    println!();
    println!("Log filtering follows RUST_LOG (default: warn).");
}
