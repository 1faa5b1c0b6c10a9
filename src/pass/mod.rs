//! Password generation and repair.

pub mod charset;
pub mod compliance;
mod generate;
mod password;
mod repair;

pub use compliance::{
    class_occurrence_indexes, class_with_max_occurrences, contains_class, contains_digit,
    contains_lowercase, contains_special, contains_uppercase, is_compliant, missing_classes,
};
pub use generate::{generate_password, generate_with, sample};
pub use password::{PASSWORD_LENGTH, Password};
pub use repair::repair;
