#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub number: Option<usize>,
}

impl CliFlags {
    /// Passwords to emit; at least one.
    pub fn count(&self) -> usize {
        self.number.unwrap_or(1).max(1)
    }
}
