mod group;
mod point;

pub use group::{CurveGroup, Weierstrass, K256, P256};
pub use point::Point;
