/// Implements [`Curve`](super::Curve) for a marker type on top of a
/// RustCrypto curve crate.
///
/// Points cross the boundary through their uncompressed SEC1 encoding, so
/// the backend performs the membership check whenever a point is lifted.
macro_rules! impl_curve {
    ($curve:ty, $backend:ident, $name:literal, $modulus:literal, $order:literal, $gx:literal, $gy:literal) => {
        impl $curve {
            fn lift(point: &$crate::Point) -> Option<$backend::ProjectivePoint> {
                use $backend::elliptic_curve::sec1::FromEncodedPoint;

                let (x, y) = match point.coordinates() {
                    Some(coordinates) => coordinates,
                    None => return Some($backend::ProjectivePoint::IDENTITY),
                };
                let x = Self::field_bytes(x)?;
                let y = Self::field_bytes(y)?;
                let encoded = $backend::EncodedPoint::from_affine_coordinates(&x, &y, false);
                Option::<$backend::AffinePoint>::from($backend::AffinePoint::from_encoded_point(
                    &encoded,
                ))
                .map($backend::ProjectivePoint::from)
            }

            fn lower(point: $backend::ProjectivePoint) -> $crate::Point {
                use $backend::elliptic_curve::sec1::{Coordinates, ToEncodedPoint};

                let encoded = point.to_affine().to_encoded_point(false);
                match encoded.coordinates() {
                    Coordinates::Uncompressed { x, y } => $crate::Point::new(
                        $crate::BigUint::from_bytes_be(x),
                        $crate::BigUint::from_bytes_be(y),
                    ),
                    // uncompressed encodings only carry the identity otherwise
                    _ => $crate::Point::Identity,
                }
            }

            fn field_bytes(n: &$crate::BigUint) -> Option<$backend::FieldBytes> {
                let bytes = $crate::utils::to_be_bytes_padded(n, 32);
                (bytes.len() == 32).then(|| $backend::FieldBytes::clone_from_slice(&bytes))
            }

            #[cfg(test)]
            pub(crate) fn backend_generator() -> $crate::Point {
                Self::lower($backend::ProjectivePoint::GENERATOR)
            }
        }

        impl $crate::curve::Curve for $curve {
            const NAME: &'static str = $name;
            const PRIME_MODULUS: $crate::U256 = $crate::U256::from_be_hex($modulus);
            const ORDER: $crate::U256 = $crate::U256::from_be_hex($order);
            const GENERATOR_X: $crate::U256 = $crate::U256::from_be_hex($gx);
            const GENERATOR_Y: $crate::U256 = $crate::U256::from_be_hex($gy);

            fn contains(point: &$crate::Point) -> bool {
                !point.is_identity() && Self::lift(point).is_some()
            }

            fn add(lhs: &$crate::Point, rhs: &$crate::Point) -> Option<$crate::Point> {
                Some(Self::lower(Self::lift(lhs)? + Self::lift(rhs)?))
            }

            fn double(point: &$crate::Point) -> Option<$crate::Point> {
                use $backend::elliptic_curve::group::Group;

                Self::lift(point).map(|p| Self::lower(<$backend::ProjectivePoint as Group>::double(&p)))
            }

            fn mul(scalar: &$crate::U256, point: &$crate::Point) -> Option<$crate::Point> {
                use $backend::elliptic_curve::ops::Reduce;

                let scalar = <$backend::Scalar as Reduce<$crate::U256>>::from_uint_reduced(*scalar);
                Self::lift(point).map(|p| Self::lower(p * scalar))
            }
        }
    };
}

pub(super) use impl_curve;
