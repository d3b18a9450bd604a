//! Uniform sampling of secret scalars from a cryptographic entropy source.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Consecutive rejections after which the entropy source is assumed to
/// be broken. For the supported curves a single sample is rejected with
/// probability of about 2^-32 or less.
const MAX_REJECTIONS: usize = 256;

#[derive(Error, Debug)]
pub enum ScalarError {
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand_core::Error),
    #[error("empty scalar range for order {0}")]
    EmptyRange(BigUint),
    #[error("no scalar in range after {0} samples")]
    Exhausted(usize),
}

/// A uniform integer in `[0, 2^bits)`.
pub fn random_bits<R: RngCore + CryptoRng>(rng: &mut R, bits: u64) -> Result<BigUint, ScalarError> {
    let len = ((bits + 7) / 8) as usize;
    let mut bytes = vec![0u8; len];
    rng.try_fill_bytes(&mut bytes)?;
    let excess = len as u64 * 8 - bits;
    if excess > 0 {
        bytes[0] &= 0xff >> excess;
    }
    Ok(BigUint::from_bytes_be(&bytes))
}

/// A uniform scalar in `[1, order - 1]`, drawn by rejection sampling.
pub fn random_scalar<R: RngCore + CryptoRng>(
    rng: &mut R,
    order: &BigUint,
) -> Result<BigUint, ScalarError> {
    if order <= &BigUint::from(1u8) {
        return Err(ScalarError::EmptyRange(order.clone()));
    }
    let bits = order.bits();
    for _ in 0..MAX_REJECTIONS {
        let candidate = random_bits(rng, bits)?;
        if !candidate.is_zero() && &candidate < order {
            return Ok(candidate);
        }
    }
    Err(ScalarError::Exhausted(MAX_REJECTIONS))
}
