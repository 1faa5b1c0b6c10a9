//! Fixed-length password generation with guaranteed class coverage.
//!
//! [`generate_password`] returns an 8-character string holding at least one
//! lowercase letter, uppercase letter, digit and special character, drawn
//! from an OS-seeded CSPRNG.

pub mod entropy;
mod error;
pub mod pass;

pub use error::{Error, Result};
pub use pass::charset::CharClass;
pub use pass::{PASSWORD_LENGTH, Password, generate_password, generate_with};
