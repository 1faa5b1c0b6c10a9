//! Process-wide quiet switch and prompt gating.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prompts need someone at stdin to answer them; quiet runs never prompt.
pub fn skip_prompt() -> bool {
    enabled() || !std::io::stdin().is_terminal()
}
