//! Text interchange for big integers, public keys and signatures.

use crate::arithmetic::Point;
use crate::signature::Signature;
use crate::utils::to_be_bytes_padded;

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("invalid length: expected {expected} hex digits, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Parses a decimal number, or a hex number if prefixed with `0x`.
pub fn parse_biguint(s: &str) -> Result<BigUint, ParseError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => parse_hex(digits),
        None if trimmed.bytes().all(|b| b.is_ascii_digit()) => {
            BigUint::parse_bytes(trimmed.as_bytes(), 10)
        }
        None => None,
    };
    parsed.ok_or_else(|| ParseError::InvalidNumber(s.to_string()))
}

fn parse_hex(digits: &str) -> Option<BigUint> {
    // NOTE this check also rejects the `_` separators `parse_bytes` accepts
    if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        BigUint::parse_bytes(digits.as_bytes(), 16)
    } else {
        None
    }
}

fn hex_field(digits: &str, s: &str) -> Result<BigUint, ParseError> {
    parse_hex(digits).ok_or_else(|| ParseError::InvalidNumber(s.to_string()))
}

fn to_hex(n: &BigUint, width: usize) -> String {
    to_be_bytes_padded(n, width)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Parses an uncompressed SEC1 public key `0x04 || X || Y` whose
/// coordinates are `width` bytes each. A lone `0x00` is the identity.
///
/// Curve membership is not checked here.
pub fn parse_pubkey(pubkey: &str, width: usize) -> Result<Point, ParseError> {
    let trimmed = pubkey.trim().trim_start_matches("0x");
    if trimmed == "00" {
        return Ok(Point::Identity);
    }
    let expected = 2 + 4 * width;
    // NOTE the length and ascii checks keep the slicing below from
    // panicking on char boundaries
    if trimmed.len() != expected || !trimmed.is_ascii() {
        return Err(ParseError::InvalidLength {
            expected,
            got: trimmed.len(),
        });
    }
    if &trimmed[..2] != "04" {
        return Err(ParseError::Malformed(
            "public keys must be uncompressed".to_string(),
        ));
    }
    let x = hex_field(&trimmed[2..2 + 2 * width], pubkey)?;
    let y = hex_field(&trimmed[2 + 2 * width..], pubkey)?;
    Ok(Point::new(x, y))
}

pub fn encode_pubkey(pubkey: &Point, width: usize) -> String {
    match pubkey.coordinates() {
        None => "0x00".to_string(),
        Some((x, y)) => format!("0x04{}{}", to_hex(x, width), to_hex(y, width)),
    }
}

/// Parses a signature given as `r || s`, each part `width` bytes.
pub fn parse_signature(signature: &str, width: usize) -> Result<Signature, ParseError> {
    let trimmed = signature.trim().trim_start_matches("0x");
    let expected = 4 * width;
    if trimmed.len() != expected || !trimmed.is_ascii() {
        return Err(ParseError::InvalidLength {
            expected,
            got: trimmed.len(),
        });
    }
    let r = hex_field(&trimmed[..2 * width], signature)?;
    let s = hex_field(&trimmed[2 * width..], signature)?;
    Ok(Signature::new(r, s))
}

pub fn encode_signature(signature: &Signature, width: usize) -> String {
    format!(
        "0x{}{}",
        to_hex(signature.r(), width),
        to_hex(signature.s(), width)
    )
}

#[cfg(test)]
mod test {
    use super::*;

    const PUBKEY: &str = "0x0408c6cd9400645819c8c556a6e83e0a7728f070a813bb9d24d5c24290e21fc5e438396f9333264d3e7c1d3e6ee1bc572b2f00b98db7065e9bf278f2b8dbe02718";
    const SIGNATURE: &str = "0x45c4039b611c0cc207ff7fb7a6899ea0431aac2cf37515d74a71f2df00e2c3e0096fad5e7eda762898fffd4644f8a7a406bf6bde868814ea03058c882fcd2331";

    fn hex(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_biguint("12345"), Ok(BigUint::from(12345u32)));
        assert_eq!(parse_biguint(" 0x3039 "), Ok(BigUint::from(12345u32)));
        assert_eq!(parse_biguint("0X3039"), Ok(BigUint::from(12345u32)));
        assert!(parse_biguint("").is_err());
        assert!(parse_biguint("0x").is_err());
        assert!(parse_biguint("-1").is_err());
        assert!(parse_biguint("1_000").is_err());
        assert!(parse_biguint("0xfg").is_err());
    }

    #[test]
    fn pubkeys() {
        let point = parse_pubkey(PUBKEY, 32).unwrap();
        assert_eq!(
            point.x(),
            Some(&hex("08c6cd9400645819c8c556a6e83e0a7728f070a813bb9d24d5c24290e21fc5e4"))
        );
        assert_eq!(
            point.y(),
            Some(&hex("38396f9333264d3e7c1d3e6ee1bc572b2f00b98db7065e9bf278f2b8dbe02718"))
        );
        assert_eq!(encode_pubkey(&point, 32), PUBKEY);

        assert_eq!(parse_pubkey("0x00", 32), Ok(Point::Identity));
        assert_eq!(encode_pubkey(&Point::Identity, 32), "0x00");

        assert_eq!(
            parse_pubkey(&PUBKEY[..PUBKEY.len() - 2], 32),
            Err(ParseError::InvalidLength {
                expected: 130,
                got: 128
            })
        );
        let compressed = PUBKEY.replacen("0x04", "0x02", 1);
        assert!(matches!(
            parse_pubkey(&compressed, 32),
            Err(ParseError::Malformed(_))
        ));
        let garbage = PUBKEY.replacen("c6", "zz", 1);
        assert!(matches!(
            parse_pubkey(&garbage, 32),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn signatures() {
        let signature = parse_signature(SIGNATURE, 32).unwrap();
        assert_eq!(
            signature.r(),
            &hex("45c4039b611c0cc207ff7fb7a6899ea0431aac2cf37515d74a71f2df00e2c3e0")
        );
        assert_eq!(
            signature.s(),
            &hex("096fad5e7eda762898fffd4644f8a7a406bf6bde868814ea03058c882fcd2331")
        );
        assert_eq!(encode_signature(&signature, 32), SIGNATURE);
        assert!(parse_signature("0x1234", 32).is_err());
    }

    #[test]
    fn short_values_are_padded() {
        let signature = Signature::new(BigUint::from(1u8), BigUint::from(2u8));
        let encoded = encode_signature(&signature, 2);
        assert_eq!(encoded, "0x00010002");
        assert_eq!(parse_signature(&encoded, 2), Ok(signature));
    }
}
