use crate::parse::{parse_biguint, ParseError};

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize};

use std::fmt;
use std::str::FromStr;

/// An affine point, or the point at infinity.
///
/// A point carries no reference to its curve; it only has meaning
/// together with the [`CurveGroup`](super::CurveGroup) that produced it.
/// Two points are equal iff both coordinates are equal, and the identity
/// only equals itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PointRecord", into = "PointRecord")]
pub enum Point {
    Identity,
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self::Affine { x, y }
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    #[inline(always)]
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    #[inline(always)]
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// The `{"x": ..., "y": ...}` text form with decimal coordinates.
    pub fn to_json(&self) -> String {
        let record = PointRecord::from(self.clone());
        serde_json::json!({ "x": record.x, "y": record.y }).to_string()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
            Self::Affine { x, y } => write!(f, "x: {}, y: {}", x, y),
        }
    }
}

/// Parses the text form without checking curve membership, see
/// [`CurveGroup::decode_point`](super::CurveGroup::decode_point).
impl FromStr for Point {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record: PointRecord =
            serde_json::from_str(s).map_err(|e| ParseError::Malformed(e.to_string()))?;
        record.try_into()
    }
}

/// Both keys are required; the identity is written as explicit nulls.
/// Upper-case keys and bare JSON numbers are accepted for records written
/// by older tooling.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PointRecord {
    #[serde(alias = "X", deserialize_with = "coordinate")]
    x: Option<String>,
    #[serde(alias = "Y", deserialize_with = "coordinate")]
    y: Option<String>,
}

fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a coordinate string, number or null",
        )),
    }
}

impl From<Point> for PointRecord {
    fn from(point: Point) -> Self {
        match point {
            Point::Identity => Self { x: None, y: None },
            Point::Affine { x, y } => Self {
                x: Some(x.to_str_radix(10)),
                y: Some(y.to_str_radix(10)),
            },
        }
    }
}

impl TryFrom<PointRecord> for Point {
    type Error = ParseError;
    fn try_from(record: PointRecord) -> Result<Self, Self::Error> {
        match (record.x, record.y) {
            (None, None) => Ok(Point::Identity),
            (Some(x), Some(y)) => Ok(Point::new(parse_biguint(&x)?, parse_biguint(&y)?)),
            (None, Some(_)) => Err(ParseError::MissingField("x")),
            (Some(_), None) => Err(ParseError::MissingField("y")),
        }
    }
}
