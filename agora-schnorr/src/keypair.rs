use crate::arithmetic::{CurveGroup, Point};
use crate::rng::random_scalar;
use crate::Error;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

use std::fmt;

/// A private scalar `d ∈ [1, N-1]` and its public point `Q = d·G`.
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    private: BigUint,
    public: Point,
}

impl Keypair {
    pub fn random<G, R>(group: &G, rng: &mut R) -> Result<Self, Error>
    where
        G: CurveGroup + ?Sized,
        R: RngCore + CryptoRng,
    {
        let private = random_scalar(rng, group.order()).map_err(|e| {
            tracing::warn!(curve = group.name(), error = %e, "private key sampling failed");
            Error::KeyGeneration(e.to_string())
        })?;
        Self::from_private(group, private)
    }

    /// Derives the public point of a known private scalar.
    pub fn from_private<G>(group: &G, private: BigUint) -> Result<Self, Error>
    where
        G: CurveGroup + ?Sized,
    {
        if private.is_zero() || &private >= group.order() {
            return Err(Error::KeyGeneration(
                "private scalar is outside [1, N-1]".to_string(),
            ));
        }
        let public = group.scalar_base_mult(&private);
        if !group.is_on_curve(&public) {
            return Err(Error::KeyGeneration(format!(
                "public point is not on {}",
                group.name()
            )));
        }
        Ok(Self { private, public })
    }

    pub fn public(&self) -> &Point {
        &self.public
    }

    pub fn private(&self) -> &BigUint {
        &self.private
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("private", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}
