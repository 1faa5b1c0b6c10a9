//! Class membership, compliance and occurrence indexing.

use super::charset::CharClass;

/// True if any character of `password` belongs to `class`.
pub fn contains_class(password: &[u8], class: CharClass) -> bool {
    password.iter().any(|&b| class.contains(b))
}

pub fn contains_lowercase(password: &[u8]) -> bool {
    contains_class(password, CharClass::Lowercase)
}

pub fn contains_uppercase(password: &[u8]) -> bool {
    contains_class(password, CharClass::Uppercase)
}

pub fn contains_digit(password: &[u8]) -> bool {
    contains_class(password, CharClass::Digit)
}

pub fn contains_special(password: &[u8]) -> bool {
    contains_class(password, CharClass::Special)
}

/// Classes with no representative in `password`, in repair order.
pub fn missing_classes(password: &[u8]) -> impl Iterator<Item = CharClass> + '_ {
    CharClass::ALL
        .into_iter()
        .filter(move |&class| !contains_class(password, class))
}

/// True when every class is represented.
pub fn is_compliant(password: &[u8]) -> bool {
    missing_classes(password).next().is_none()
}

/// Ascending positions of `password` whose character belongs to `class`.
pub fn class_occurrence_indexes(password: &[u8], class: CharClass) -> Vec<usize> {
    password
        .iter()
        .enumerate()
        .filter(|&(_, &b)| class.contains(b))
        .map(|(i, _)| i)
        .collect()
}

/// The index set with the strictly largest length. Ties go to the earliest
/// set, so callers passing sets in [`CharClass::ALL`] order get the
/// lowercase-first tie break. `None` when no sets are given.
pub fn class_with_max_occurrences(index_sets: &[Vec<usize>]) -> Option<&[usize]> {
    let max = index_sets.iter().map(Vec::len).max()?;
    index_sets
        .iter()
        .find(|set| set.len() == max)
        .map(Vec::as_slice)
}
