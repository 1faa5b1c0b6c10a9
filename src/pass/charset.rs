//! Character classes a password is drawn from.

use std::fmt;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b" !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// Membership is tested with binary search, so every table must be
// non-empty and strictly ascending.
const _: () = assert!(strictly_ascending(LOWERCASE), "lowercase table is not sorted");
const _: () = assert!(strictly_ascending(UPPERCASE), "uppercase table is not sorted");
const _: () = assert!(strictly_ascending(DIGITS), "digit table is not sorted");
const _: () = assert!(strictly_ascending(SPECIAL), "special table is not sorted");

const fn strictly_ascending(chars: &[u8]) -> bool {
    if chars.is_empty() {
        return false;
    }
    let mut i = 1;
    while i < chars.len() {
        if chars[i - 1] >= chars[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// One of the four disjoint classes every password must draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

static CLASSES: [CharClass; 4] = CharClass::ALL;

impl CharClass {
    /// Sampling order, also the order missing classes are repaired in and
    /// the tie-break order for occurrence counts.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Sorted, duplicate-free characters of this class.
    pub const fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Special => "special",
        }
    }

    #[inline]
    pub fn contains(self, byte: u8) -> bool {
        self.chars().binary_search(&byte).is_ok()
    }

    /// The class `byte` belongs to, if any.
    pub fn of(byte: u8) -> Option<CharClass> {
        CharClass::ALL.into_iter().find(|class| class.contains(byte))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn lowercase() -> &'static [u8] {
    LOWERCASE
}

pub fn uppercase() -> &'static [u8] {
    UPPERCASE
}

pub fn digits() -> &'static [u8] {
    DIGITS
}

pub fn special() -> &'static [u8] {
    SPECIAL
}

/// All four classes in sampling order.
pub fn classes() -> &'static [CharClass; 4] {
    &CLASSES
}

/// Total number of distinct characters across all classes.
pub fn size() -> usize {
    CharClass::ALL.iter().map(|class| class.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted_and_unique() {
        for class in CharClass::ALL {
            assert!(strictly_ascending(class.chars()), "{class} not ascending");
        }
    }

    #[test]
    fn classes_are_disjoint() {
        for byte in 0..=u8::MAX {
            let hits = CharClass::ALL.iter().filter(|c| c.contains(byte)).count();
            assert!(hits <= 1, "byte {byte} is in {hits} classes");
        }
    }

    #[test]
    fn special_covers_ascii_punctuation_and_space() {
        let expected: Vec<u8> = (0x20..0x7f)
            .filter(|b: &u8| *b == b' ' || b.is_ascii_punctuation())
            .collect();
        assert_eq!(special(), expected.as_slice());
        assert_eq!(special().len(), 33);
    }

    #[test]
    fn accessors_match_classes() {
        assert_eq!(lowercase(), CharClass::Lowercase.chars());
        assert_eq!(uppercase(), CharClass::Uppercase.chars());
        assert_eq!(digits(), CharClass::Digit.chars());
        assert_eq!(special(), CharClass::Special.chars());
        assert_eq!(classes(), &CharClass::ALL);
        assert_eq!(size(), 26 + 26 + 10 + 33);
    }

    #[test]
    fn of_finds_owning_class() {
        assert_eq!(CharClass::of(b'q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of(b'Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of(b'7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of(b'~'), Some(CharClass::Special));
        assert_eq!(CharClass::of(b' '), Some(CharClass::Special));
        assert_eq!(CharClass::of(b'\n'), None);
        assert_eq!(CharClass::of(0xe9), None);
    }

    #[test]
    fn ascending_check_rejects_bad_tables() {
        assert!(!strictly_ascending(b""));
        assert!(!strictly_ascending(b"ba"));
        assert!(!strictly_ascending(b"aab"));
        assert!(strictly_ascending(b"a"));
    }
}
