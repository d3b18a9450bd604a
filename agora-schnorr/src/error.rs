use crate::parse::ParseError;

use thiserror::Error;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum Error {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),
    #[error("nonce generation failed: {0}")]
    NonceGeneration(String),
    #[error("invalid signature input: {0}")]
    InvalidSignatureInput(&'static str),
    #[error("invalid point: {0}")]
    InvalidPoint(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
