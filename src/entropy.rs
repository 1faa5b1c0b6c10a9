//! Cryptographically secure randomness.
//!
//! Every generation call seeds its own ChaCha-based [`StdRng`] from the
//! operating system. Sampling and repair are generic over [`CryptoRng`], so a
//! general-purpose PRNG cannot be passed in by accident.

use rand::rngs::StdRng;
use rand::{CryptoRng, Rng, SeedableRng};
use tracing::trace;

use crate::error::{Error, Result};

/// Generator used for production passwords.
pub type SecureRng = StdRng;

/// Seed a fresh generator from the operating system.
///
/// Fails only when the OS source itself fails; there is no fallback.
pub fn from_os() -> Result<SecureRng> {
    let rng = StdRng::try_from_os_rng().map_err(|err| Error::Entropy(Box::new(err)))?;
    trace!("seeded generator from os");
    Ok(rng)
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn index<R: CryptoRng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}

/// Uniform pick from a non-empty slice.
#[inline]
pub fn pick<R: CryptoRng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[index(rng, items.len())]
}

pub fn source_name() -> &'static str {
    "os-seeded chacha12"
}
