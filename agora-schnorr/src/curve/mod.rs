mod impl_macro;

use crate::arithmetic::{CurveGroup, Point, K256, P256};
use crate::U256;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Domain parameters of a prime-order short Weierstrass curve together
/// with the group law of an audited backend implementation.
///
/// Coordinates handed to the arithmetic functions are affine, and every
/// function returns `None` if an input point does not satisfy the curve
/// equation.
pub trait Curve: Clone + Copy + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    const NAME: &'static str;
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;

    /// Whether `point` is an affine point satisfying the curve equation.
    fn contains(point: &Point) -> bool;

    fn add(lhs: &Point, rhs: &Point) -> Option<Point>;

    fn double(point: &Point) -> Option<Point>;

    /// `scalar` is reduced modulo the group order by the backend.
    fn mul(scalar: &U256, point: &Point) -> Option<Point>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NistP256;

impl_macro::impl_curve!(
    NistP256,
    p256,
    "P-256",
    "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secp256k1;

impl_macro::impl_curve!(
    Secp256k1,
    k256,
    "secp256k1",
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
);

/// Runtime selector for the supported curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveName {
    #[default]
    P256,
    Secp256k1,
}

impl CurveName {
    pub fn group(self) -> Box<dyn CurveGroup> {
        match self {
            Self::P256 => Box::new(P256::new()),
            Self::Secp256k1 => Box::new(K256::new()),
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::P256 => write!(f, "p256"),
            Self::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

impl FromStr for CurveName {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p256" | "p-256" | "secp256r1" => Ok(Self::P256),
            "secp256k1" | "k256" => Ok(Self::Secp256k1),
            other => Err(format!("unknown curve `{}`", other)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::u256_to_biguint;

    #[test]
    fn orders_match_backend() {
        assert_eq!(
            NistP256::ORDER,
            <p256::NistP256 as p256::elliptic_curve::Curve>::ORDER
        );
        assert_eq!(
            Secp256k1::ORDER,
            <k256::Secp256k1 as k256::elliptic_curve::Curve>::ORDER
        );
    }

    #[test]
    fn generators_are_on_curve() {
        let g = Point::new(
            u256_to_biguint(&NistP256::GENERATOR_X),
            u256_to_biguint(&NistP256::GENERATOR_Y),
        );
        assert!(NistP256::contains(&g));
        assert!(!Secp256k1::contains(&g));

        let g = Point::new(
            u256_to_biguint(&Secp256k1::GENERATOR_X),
            u256_to_biguint(&Secp256k1::GENERATOR_Y),
        );
        assert!(Secp256k1::contains(&g));
        assert!(!NistP256::contains(&g));
    }

    #[test]
    fn generators_match_backend() {
        let g = Point::new(
            u256_to_biguint(&NistP256::GENERATOR_X),
            u256_to_biguint(&NistP256::GENERATOR_Y),
        );
        assert_eq!(NistP256::mul(&U256::ONE, &g), Some(g.clone()));
        assert_eq!(NistP256::backend_generator(), g);

        let g = Point::new(
            u256_to_biguint(&Secp256k1::GENERATOR_X),
            u256_to_biguint(&Secp256k1::GENERATOR_Y),
        );
        assert_eq!(Secp256k1::backend_generator(), g);
    }

    #[test]
    fn identity_is_not_contained() {
        assert!(!NistP256::contains(&Point::Identity));
        assert!(!Secp256k1::contains(&Point::Identity));
        // but it is a valid operand
        let g = NistP256::backend_generator();
        assert_eq!(NistP256::add(&Point::Identity, &g), Some(g));
        assert_eq!(NistP256::double(&Point::Identity), Some(Point::Identity));
    }

    #[test]
    fn oversized_coordinates_are_rejected() {
        let huge = u256_to_biguint(&U256::MAX) + 1u8;
        let point = Point::new(huge.clone(), huge);
        assert!(!NistP256::contains(&point));
        assert_eq!(NistP256::double(&point), None);
    }

    #[test]
    fn curve_names() {
        assert_eq!("P-256".parse::<CurveName>(), Ok(CurveName::P256));
        assert_eq!("secp256k1".parse::<CurveName>(), Ok(CurveName::Secp256k1));
        assert!("ed25519".parse::<CurveName>().is_err());
        assert_eq!(CurveName::default().group().name(), "P-256");
        assert_eq!(CurveName::Secp256k1.group().name(), "secp256k1");
        assert_eq!(CurveName::Secp256k1.to_string(), "secp256k1");
    }
}
