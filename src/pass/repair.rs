//! In-place repair of passwords missing a character class.

use rand::CryptoRng;
use tracing::debug;

use super::charset::CharClass;
use super::compliance::{class_occurrence_indexes, class_with_max_occurrences, missing_classes};
use super::password::Password;
use crate::entropy;

/// Overwrite characters until every class is represented. Returns the
/// number of replacements made; a compliant password is left untouched and
/// draws no randomness.
///
/// Each step fills the first missing class (lowercase, uppercase, digit,
/// special) at a random position taken from the most frequent class. With
/// eight classified characters over at most three classes that class holds
/// at least three, so a replacement never empties it and every step adds a
/// class. At most three steps run.
pub fn repair<R: CryptoRng + ?Sized>(password: &mut Password, rng: &mut R) -> usize {
    let mut replaced = 0;

    loop {
        let Some(missing) = missing_classes(password.as_bytes()).next() else {
            break;
        };
        let occurrences =
            CharClass::ALL.map(|class| class_occurrence_indexes(password.as_bytes(), class));
        // Never empty: every byte of a Password is in some class.
        let Some(pool) = class_with_max_occurrences(&occurrences) else {
            break;
        };

        let position = entropy::pick(rng, pool);
        let byte = entropy::pick(rng, missing.chars());
        debug!(class = %missing, pool = pool.len(), position, "filling missing class");

        password.set(position, byte);
        replaced += 1;
    }

    replaced
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::compliance::{contains_special, is_compliant};

    #[test]
    fn compliant_password_is_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut password = Password::parse("aB3$kL9@").unwrap();
        assert_eq!(repair(&mut password, &mut rng), 0);
        assert_eq!(password.as_str(), "aB3$kL9@");
    }

    #[test]
    fn all_special_gains_the_other_classes() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut password = Password::parse("!!!!!!!!").unwrap();
            let replaced = repair(&mut password, &mut rng);

            assert_eq!(replaced, 3);
            assert!(is_compliant(password.as_bytes()));
            assert!(password.as_bytes().contains(&b'!'));
            assert_eq!(password.as_bytes().len(), 8);
        }
    }

    #[test]
    fn single_class_passwords_repair_in_three_steps() {
        for start in ["aaaaaaaa", "ZZZZZZZZ", "00000000", "        "] {
            let mut rng = StdRng::seed_from_u64(42);
            let mut password = Password::parse(start).unwrap();
            assert_eq!(repair(&mut password, &mut rng), 3, "{start}");
            assert!(is_compliant(password.as_bytes()), "{start}");
        }
    }

    #[test]
    fn replacements_come_from_most_frequent_class() {
        // Lowercase is missing; special holds six of eight and is the pool.
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut password = Password::parse("A1!!!!!!").unwrap();
            assert_eq!(repair(&mut password, &mut rng), 1);

            let bytes = password.as_bytes();
            assert_eq!(&bytes[..2], b"A1");
            assert_eq!(bytes[2..].iter().filter(|b| b.is_ascii_lowercase()).count(), 1);
            assert!(contains_special(bytes));
        }
    }

    #[test]
    fn tie_takes_first_class_in_order() {
        // Uppercase and digit tie at four; uppercase positions are the pool.
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut password = Password::parse("AAAA1111").unwrap();
            repair(&mut password, &mut rng);

            let bytes = password.as_bytes();
            assert!(is_compliant(bytes));
            // Lowercase took an uppercase slot, then uppercase (3 left) and
            // digit (4) made digit the pool for the special fill.
            assert_eq!(bytes[..4].iter().filter(|b| b.is_ascii_lowercase()).count(), 1);
            assert_eq!(bytes[4..].iter().filter(|b| b.is_ascii_digit()).count(), 3);
        }
    }

    #[test]
    fn repair_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut password = Password::parse("00000000").unwrap();
        repair(&mut password, &mut rng);
        let once = password.clone();
        assert_eq!(repair(&mut password, &mut rng), 0);
        assert_eq!(password, once);
    }
}
