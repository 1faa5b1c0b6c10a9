//! Fixed-length password buffer.

use std::fmt;

use zeroize::Zeroize;

use super::charset::CharClass;
use crate::error::{Error, Result};

/// Every generated password has exactly this many characters.
pub const PASSWORD_LENGTH: usize = 8;

/// A password under construction.
///
/// Every byte belongs to one of the character classes, so the buffer is
/// always valid ASCII. Repair overwrites positions in place; the length never
/// changes. The bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    bytes: [u8; PASSWORD_LENGTH],
}

impl Password {
    /// Caller guarantees every byte is a class member.
    pub(crate) fn from_bytes(bytes: [u8; PASSWORD_LENGTH]) -> Self {
        debug_assert!(bytes.iter().all(|&b| CharClass::of(b).is_some()));
        Self { bytes }
    }

    /// Parse an existing password, e.g. to run repair over it.
    pub fn parse(s: &str) -> Result<Self> {
        let actual = s.chars().count();
        if actual != PASSWORD_LENGTH {
            return Err(Error::Length {
                expected: PASSWORD_LENGTH,
                actual,
            });
        }

        let mut bytes = [0u8; PASSWORD_LENGTH];
        for (position, ch) in s.chars().enumerate() {
            bytes[position] = u8::try_from(ch)
                .ok()
                .filter(|&b| CharClass::of(b).is_some())
                .ok_or(Error::Unclassified { ch, position })?;
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        // Safety: every byte is a class member, and all classes are ASCII
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Overwrite one position with a class member.
    pub(crate) fn set(&mut self, position: usize, byte: u8) {
        debug_assert!(CharClass::of(byte).is_some());
        self.bytes[position] = byte;
    }

    /// Copy out as an owned string; the buffer itself is wiped.
    pub fn into_string(self) -> String {
        self.as_str().to_owned()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(********)")
    }
}
