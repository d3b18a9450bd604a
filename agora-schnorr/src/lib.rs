//#![deny(warnings)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

//! Schnorr signatures over prime-order short Weierstrass curves.
//!
//! The field and point arithmetic is delegated to the RustCrypto curve
//! crates; this crate only wraps their group operations behind
//! [`CurveGroup`] and builds key generation, signing and verification on
//! top of it.

pub mod arithmetic;
pub mod curve;
mod error;
mod hasher;
mod keypair;
pub mod parse;
pub mod rng;
mod scheme;
#[cfg(feature = "settings")]
pub mod settings;
mod signature;
mod utils;

pub use arithmetic::{CurveGroup, Point, Weierstrass, K256, P256};
pub use bigint::U256;
pub use curve::{Curve, CurveName, NistP256, Secp256k1};
pub use error::Error;
pub use hasher::ChallengeEncoding;
pub use keypair::Keypair;
pub use num_bigint::BigUint;
pub use scheme::Schnorr;
pub use signature::{Message, Signature};
