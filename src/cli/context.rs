//! CLI context - bundles flags and clipboard state.

use std::error::Error as _;
use std::io::{self, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, info};
use zeroize::Zeroize;

use super::output::SecureBufWriter;
use super::{CliFlags, ParseError, logging, prompts, quiet};
use crate::exits;

/// Why the run ended early.
#[derive(Debug, PartialEq, Eq)]
pub enum Stop {
    /// Not an error, just done.
    Done,
    Failed,
    /// SIGINT/SIGTERM/SIGHUP arrived mid-run.
    Interrupted,
}

/// Application context for CLI mode.
pub struct Context {
    flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse arguments and set up quiet mode and logging.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);
        logging::init(flags.quiet);

        Ok(Self {
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.open_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            prompts::print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("randclass {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn open_clipboard(&mut self) -> Result<(), Stop> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Stop::Done);
                }
            }
        }
        Ok(())
    }

    fn generate_output(&mut self) -> Result<(), Stop> {
        let count = self.flags.count();
        info!(count, source = randclass::entropy::source_name(), "generating");

        let stdout = std::io::stdout();
        let Some(ctx) = self.clipboard.as_mut() else {
            let mut out = SecureBufWriter::new(stdout.lock());
            return write_passwords(&mut out, count, exits::flag());
        };

        let mut passwords = String::with_capacity(count * (randclass::PASSWORD_LENGTH + 1));
        for _ in 0..count {
            if exits::interrupted() {
                passwords.zeroize();
                return Err(Stop::Interrupted);
            }
            let mut pass = match generate() {
                Ok(pass) => pass,
                Err(stop) => {
                    passwords.zeroize();
                    return Err(stop);
                }
            };
            passwords.push_str(&pass);
            passwords.push('\n');
            pass.zeroize();
        }

        let result = match ctx.set_contents(passwords.clone()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied(count);
                Ok(())
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                prompts::warn("Printing to terminal instead");
                let mut out = SecureBufWriter::new(stdout.lock());
                emit(&mut out, passwords.as_bytes()).and_then(|()| finish(&mut out))
            }
        };
        passwords.zeroize();
        result
    }
}

/// Generate `count` passwords into `out`, one per line. When `stop` is
/// raised, what was generated so far is flushed and the run ends.
fn write_passwords<W: Write>(
    out: &mut SecureBufWriter<W>,
    count: usize,
    stop: &AtomicBool,
) -> Result<(), Stop> {
    for _ in 0..count {
        if stop.load(Ordering::Relaxed) {
            finish(out)?;
            return Err(Stop::Interrupted);
        }
        let mut pass = generate()?;
        pass.push('\n');
        let written = emit(out, pass.as_bytes());
        pass.zeroize();
        written?;
    }
    finish(out)
}

fn emit<W: Write>(out: &mut SecureBufWriter<W>, bytes: &[u8]) -> Result<(), Stop> {
    out.write_all(bytes).map_err(write_failed)
}

fn finish<W: Write>(out: &mut SecureBufWriter<W>) -> Result<(), Stop> {
    out.flush().map_err(write_failed)
}

/// A closed reader (e.g. `| head`) ends the run quietly; any other write
/// error fails it.
fn write_failed(e: io::Error) -> Stop {
    if e.kind() == ErrorKind::BrokenPipe {
        debug!("stdout closed");
        return Stop::Done;
    }
    prompts::error(&format!("Error writing passwords: {e}"));
    Stop::Failed
}

fn generate() -> Result<String, Stop> {
    randclass::generate_password().map_err(|e| {
        match e.source() {
            Some(cause) => prompts::error(&format!("Error: {e}: {cause}")),
            None => prompts::error(&format!("Error: {e}")),
        }
        Stop::Failed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink failing every write with `kind`.
    struct Failing(ErrorKind);

    impl Write for Failing {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_requested_number_of_lines() {
        let mut sink = Vec::new();
        {
            let mut out = SecureBufWriter::new(&mut sink);
            assert_eq!(write_passwords(&mut out, 3, &AtomicBool::new(false)), Ok(()));
        }
        let text = String::from_utf8(sink).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == randclass::PASSWORD_LENGTH));
    }

    #[test]
    fn io_error_fails_the_run() {
        let mut out = SecureBufWriter::new(Failing(ErrorKind::Other));
        assert_eq!(
            write_passwords(&mut out, 1, &AtomicBool::new(false)),
            Err(Stop::Failed)
        );
    }

    #[test]
    fn broken_pipe_ends_quietly() {
        let mut out = SecureBufWriter::new(Failing(ErrorKind::BrokenPipe));
        assert_eq!(
            write_passwords(&mut out, 2, &AtomicBool::new(false)),
            Err(Stop::Done)
        );
    }

    #[test]
    fn raised_stop_flag_interrupts_before_generating() {
        let mut sink = Vec::new();
        {
            let mut out = SecureBufWriter::new(&mut sink);
            assert_eq!(
                write_passwords(&mut out, 5, &AtomicBool::new(true)),
                Err(Stop::Interrupted)
            );
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn clipboard_fallback_text_reaches_writer() {
        let mut sink = Vec::new();
        {
            let mut out = SecureBufWriter::new(&mut sink);
            assert_eq!(emit(&mut out, b"aB3$kL9@\n"), Ok(()));
            assert_eq!(finish(&mut out), Ok(()));
        }
        assert_eq!(sink, b"aB3$kL9@\n");
    }

    #[test]
    fn fallback_write_error_fails() {
        let mut out = SecureBufWriter::new(Failing(ErrorKind::Other));
        assert_eq!(emit(&mut out, b"aB3$kL9@\n"), Ok(()));
        assert_eq!(finish(&mut out), Err(Stop::Failed));
    }
}
