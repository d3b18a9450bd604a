use crate::arithmetic::{CurveGroup, Point};
use crate::hasher::{ChallengeEncoding, ChallengeHasher};
use crate::keypair::Keypair;
use crate::rng::random_scalar;
use crate::signature::{Message, Signature};
use crate::Error;

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

use std::marker::PhantomData;

/// Schnorr signatures over the group `G` with challenge hash `D`.
///
/// The challenge is `e = H(Rx || Qx || Qy || m) mod N`. Signing draws a
/// fresh nonce from the caller's entropy source on every call, so signing
/// the same message twice yields two different valid signatures.
pub struct Schnorr<G, D = Sha256> {
    group: G,
    encoding: ChallengeEncoding,
    _digest: PhantomData<fn() -> D>,
}

impl<G: CurveGroup> Schnorr<G> {
    pub fn new(group: G) -> Self {
        Self::with_encoding(group, ChallengeEncoding::default())
    }
}

impl<G: CurveGroup, D: Digest> Schnorr<G, D> {
    pub fn with_encoding(group: G, encoding: ChallengeEncoding) -> Self {
        Self {
            group,
            encoding,
            _digest: PhantomData,
        }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn encoding(&self) -> ChallengeEncoding {
        self.encoding
    }

    pub fn generate_keypair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Keypair, Error> {
        let keypair = Keypair::random(&self.group, rng)?;
        tracing::debug!(curve = self.group.name(), "generated keypair");
        Ok(keypair)
    }

    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        message: &Message,
        keypair: &Keypair,
    ) -> Result<Signature, Error> {
        if !self.group.is_on_curve(keypair.public()) {
            return Err(Error::InvalidPoint(format!(
                "keypair does not belong to {}",
                self.group.name()
            )));
        }
        let order = self.group.order();
        let k = random_scalar(rng, order).map_err(|e| {
            tracing::warn!(curve = self.group.name(), error = %e, "nonce sampling failed");
            Error::NonceGeneration(e.to_string())
        })?;

        // k is in [1, N-1], so the commitment is never the identity
        let r_x = self
            .group
            .scalar_base_mult(&k)
            .x()
            .cloned()
            .ok_or_else(|| Error::NonceGeneration("nonce commitment is the identity".to_string()))?;

        let e = self.challenge(&r_x, keypair.public(), message);
        let s = (k + e * keypair.private()) % order;

        tracing::debug!(curve = self.group.name(), "signed message");
        Ok(Signature::new(r_x, s))
    }

    /// Checks `s·G - e·Q` against the signature's commitment.
    ///
    /// A well-formed signature that does not verify yields `Ok(false)`;
    /// an absent (identity) or foreign public point is an error.
    pub fn verify(
        &self,
        signature: &Signature,
        message: &Message,
        public: &Point,
    ) -> Result<bool, Error> {
        if public.is_identity() {
            return Err(Error::InvalidSignatureInput("missing public key"));
        }
        if !self.group.is_on_curve(public) {
            return Err(Error::InvalidSignatureInput("public key is not on the curve"));
        }
        if signature.s() >= self.group.order() {
            tracing::debug!(curve = self.group.name(), "rejected: s out of range");
            return Ok(false);
        }
        if signature.r() >= self.group.modulus() {
            tracing::debug!(curve = self.group.name(), "rejected: r out of range");
            return Ok(false);
        }

        let e = self.challenge(signature.r(), public, message);
        let s_g = self.group.scalar_base_mult(signature.s());
        let e_q = self.group.scalar_mult(&e, public);
        let r_point = self.group.sub(&s_g, &e_q);

        let valid = self.group.is_on_curve(&r_point) && r_point.x() == Some(signature.r());
        tracing::debug!(curve = self.group.name(), valid, "verified signature");
        Ok(valid)
    }

    fn challenge(&self, r_x: &BigUint, public: &Point, message: &Message) -> BigUint {
        let mut hasher = ChallengeHasher::<D>::new(self.encoding, self.group.field_size());
        hasher.insert_coordinate(Some(r_x));
        hasher.insert_point(public);
        hasher.insert_message(message);
        hasher.finalize() % self.group.order()
    }
}
