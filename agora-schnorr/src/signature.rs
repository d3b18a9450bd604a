use crate::parse::parse_biguint;
use crate::Error;

use borsh::{BorshDeserialize, BorshSerialize};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A message to be signed, read as an unsigned big-endian integer.
///
/// Leading zero bytes do not change the integer and are therefore not
/// covered by a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message(BigUint);

impl Message {
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<BigUint> for Message {
    fn from(n: BigUint) -> Self {
        Self(n)
    }
}

/// A Schnorr signature `(R, s)`, where `R` is the x coordinate of the
/// nonce commitment `k·G` and `s = k + e·d mod N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignatureRecord", into = "SignatureRecord")]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigUint {
        &self.r
    }

    pub fn s(&self) -> &BigUint {
        &self.s
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "r": self.r.to_str_radix(10),
            "s": self.s.to_str_radix(10),
        })
        .to_string()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r: {}, s: {}", self.r, self.s)
    }
}

impl FromStr for Signature {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record: SignatureRecord = serde_json::from_str(s)
            .map_err(|e| crate::parse::ParseError::Malformed(e.to_string()))?;
        record.try_into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SignatureRecord {
    r: Option<String>,
    s: Option<String>,
}

impl From<Signature> for SignatureRecord {
    fn from(signature: Signature) -> Self {
        Self {
            r: Some(signature.r.to_str_radix(10)),
            s: Some(signature.s.to_str_radix(10)),
        }
    }
}

impl TryFrom<SignatureRecord> for Signature {
    type Error = Error;
    fn try_from(record: SignatureRecord) -> Result<Self, Self::Error> {
        let r = record
            .r
            .ok_or(Error::InvalidSignatureInput("missing commitment `r`"))?;
        let s = record
            .s
            .ok_or(Error::InvalidSignatureInput("missing response `s`"))?;
        Ok(Self::new(parse_biguint(&r)?, parse_biguint(&s)?))
    }
}

impl BorshSerialize for Signature {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        BorshSerialize::serialize(&self.r.to_bytes_be(), writer)?;
        BorshSerialize::serialize(&self.s.to_bytes_be(), writer)
    }
}

impl BorshDeserialize for Signature {
    fn deserialize(buf: &mut &[u8]) -> std::io::Result<Self> {
        let r = <Vec<u8> as BorshDeserialize>::deserialize(buf)?;
        let s = <Vec<u8> as BorshDeserialize>::deserialize(buf)?;
        Ok(Self::new(
            BigUint::from_bytes_be(&r),
            BigUint::from_bytes_be(&s),
        ))
    }
}
