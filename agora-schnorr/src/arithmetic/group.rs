use super::Point;
use crate::curve::{Curve, NistP256, Secp256k1};
use crate::utils::{biguint_to_u256, u256_to_biguint};
use crate::Error;

use num_bigint::BigUint;

use std::marker::PhantomData;

/// The group operations a signature scheme needs from a curve.
///
/// Every point passed to an operation must belong to this group's curve
/// (or be the identity). Implementations are immutable and safe to share
/// between threads.
pub trait CurveGroup: Send + Sync {
    fn name(&self) -> &'static str;

    /// The generator `G`.
    fn base_point(&self) -> Point;

    /// The prime order `N` of the subgroup generated by `G`.
    fn order(&self) -> &BigUint;

    /// The field prime `p`.
    fn modulus(&self) -> &BigUint;

    /// `scalar · point`, with `scalar` reduced modulo `N`.
    fn scalar_mult(&self, scalar: &BigUint, point: &Point) -> Point;

    fn add(&self, lhs: &Point, rhs: &Point) -> Point;

    /// Agrees with `add(point, point)` for every point.
    fn double(&self, point: &Point) -> Point;

    /// Whether `point` is an affine point on the curve. The identity has no
    /// affine coordinates and is rejected.
    fn is_on_curve(&self, point: &Point) -> bool;

    /// Flips the y coordinate modulo `p`.
    fn negate(&self, point: &Point) -> Point {
        match point.coordinates() {
            None => Point::Identity,
            Some((x, y)) => {
                let p = self.modulus();
                Point::new(x.clone(), (p - &(y % p)) % p)
            }
        }
    }

    fn sub(&self, lhs: &Point, rhs: &Point) -> Point {
        self.add(lhs, &self.negate(rhs))
    }

    fn scalar_base_mult(&self, scalar: &BigUint) -> Point {
        self.scalar_mult(scalar, &self.base_point())
    }

    /// Byte width of a field element.
    fn field_size(&self) -> usize {
        ((self.modulus().bits() + 7) / 8) as usize
    }

    /// Builds an affine point from coordinates that must lie on the curve.
    fn point(&self, x: BigUint, y: BigUint) -> Result<Point, Error> {
        let point = Point::new(x, y);
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::InvalidPoint(format!("{} is not on {}", point, self.name())))
        }
    }

    /// Parses the `{"x": ..., "y": ...}` text form and checks membership.
    fn decode_point(&self, text: &str) -> Result<Point, Error> {
        let point: Point = text.parse()?;
        if point.is_identity() || self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::InvalidPoint(format!("{} is not on {}", point, self.name())))
        }
    }
}

impl<G: CurveGroup + ?Sized> CurveGroup for Box<G> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn base_point(&self) -> Point {
        (**self).base_point()
    }

    fn order(&self) -> &BigUint {
        (**self).order()
    }

    fn modulus(&self) -> &BigUint {
        (**self).modulus()
    }

    fn scalar_mult(&self, scalar: &BigUint, point: &Point) -> Point {
        (**self).scalar_mult(scalar, point)
    }

    fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        (**self).add(lhs, rhs)
    }

    fn double(&self, point: &Point) -> Point {
        (**self).double(point)
    }

    fn is_on_curve(&self, point: &Point) -> bool {
        (**self).is_on_curve(point)
    }
}

/// The group of a short Weierstrass curve `C`.
///
/// # Panics
///
/// The arithmetic operations panic when handed a point that is not on `C`.
#[derive(Clone, Debug)]
pub struct Weierstrass<C: Curve> {
    generator: Point,
    order: BigUint,
    modulus: BigUint,
    _curve: PhantomData<C>,
}

pub type P256 = Weierstrass<NistP256>;
pub type K256 = Weierstrass<Secp256k1>;

impl<C: Curve> Weierstrass<C> {
    pub fn new() -> Self {
        Self {
            generator: Point::new(
                u256_to_biguint(&C::GENERATOR_X),
                u256_to_biguint(&C::GENERATOR_Y),
            ),
            order: u256_to_biguint(&C::ORDER),
            modulus: u256_to_biguint(&C::PRIME_MODULUS),
            _curve: PhantomData,
        }
    }
}

impl<C: Curve> Default for Weierstrass<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn foreign_point<C: Curve>() -> Point {
    panic!("point is not on the {} curve", C::NAME)
}

impl<C: Curve> CurveGroup for Weierstrass<C> {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn base_point(&self) -> Point {
        self.generator.clone()
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn scalar_mult(&self, scalar: &BigUint, point: &Point) -> Point {
        // NOTE unwrap is fine here because the reduced scalar is
        // smaller than the 256 bit group order
        let reduced = biguint_to_u256(&(scalar % &self.order)).unwrap();
        C::mul(&reduced, point).unwrap_or_else(foreign_point::<C>)
    }

    fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        C::add(lhs, rhs).unwrap_or_else(foreign_point::<C>)
    }

    fn double(&self, point: &Point) -> Point {
        C::double(point).unwrap_or_else(foreign_point::<C>)
    }

    fn is_on_curve(&self, point: &Point) -> bool {
        C::contains(point)
    }
}
