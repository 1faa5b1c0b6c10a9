//! Signal handling: interrupt requests stop generation at the next password
//! so buffered output is flushed and wiped before exit.

use std::sync::atomic::{AtomicBool, Ordering};

/// Exit code after SIGINT/SIGTERM/SIGHUP, as a shell reports Ctrl+C.
pub const INTERRUPTED_EXIT: u8 = 130;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Flag raised by the signal handler; checked between passwords.
pub fn flag() -> &'static AtomicBool {
    &INTERRUPTED
}

pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

/// Only touches an atomic, which is async-signal-safe.
#[cfg_attr(not(unix), allow(dead_code))]
extern "C" fn signal_handler(_: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install handlers for SIGINT, SIGTERM and SIGHUP. Call early in main().
#[cfg(unix)]
pub fn install_handlers() {
    for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
        unsafe {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_raises_flag() {
        INTERRUPTED.store(false, Ordering::SeqCst);
        assert!(!interrupted());
        signal_handler(libc::SIGINT);
        assert!(interrupted());
        assert!(flag().load(Ordering::SeqCst));
        INTERRUPTED.store(false, Ordering::SeqCst);
    }
}
