//! Password generation.

use rand::CryptoRng;
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::charset::CharClass;
use super::password::{PASSWORD_LENGTH, Password};
use super::repair::repair;
use crate::entropy;
use crate::error::Result;

/// Generate one compliant password from a freshly seeded OS generator.
///
/// Errors only if the operating system cannot supply entropy.
pub fn generate_password() -> Result<String> {
    let mut rng = entropy::from_os()?;
    Ok(generate_with(&mut rng))
}

/// Sample, then repair, using the given generator.
pub fn generate_with<R: CryptoRng + ?Sized>(rng: &mut R) -> String {
    let mut password = sample(rng);
    let repairs = repair(&mut password, rng);
    debug!(repairs, "generated password");
    password.into_string()
}

/// Draw each position by picking a class uniformly, then a character of
/// that class uniformly. The result may miss classes.
pub fn sample<R: CryptoRng + ?Sized>(rng: &mut R) -> Password {
    let mut bytes = [0u8; PASSWORD_LENGTH];
    let mut counts = [0usize; 4];

    for slot in bytes.iter_mut() {
        let i = entropy::index(rng, CharClass::ALL.len());
        *slot = entropy::pick(rng, CharClass::ALL[i].chars());
        counts[i] += 1;
    }

    let password = Password::from_bytes(bytes);
    bytes.zeroize();
    trace!(
        lowercase = counts[0],
        uppercase = counts[1],
        digit = counts[2],
        special = counts[3],
        "sampled password"
    );
    password
}
