use crate::arithmetic::Point;
use crate::signature::Message;
use crate::utils::{to_be_bytes_minimal, to_be_bytes_padded};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::Digest;

/// Byte encoding of the challenge hash inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeEncoding {
    /// Coordinates left-padded to the field width, followed by the message.
    /// Identical to `Minimal` when every coordinate already fills the width.
    #[default]
    FixedWidth,
    /// Minimal big-endian bytes, zero and absent inputs contributing
    /// nothing. Compatible with signatures of the legacy signer.
    Minimal,
}

pub struct ChallengeHasher<D> {
    hasher: D,
    encoding: ChallengeEncoding,
    width: usize,
}

impl<D: Digest> ChallengeHasher<D> {
    pub fn new(encoding: ChallengeEncoding, width: usize) -> Self {
        Self {
            hasher: D::new(),
            encoding,
            width,
        }
    }

    pub fn insert_coordinate(&mut self, coordinate: Option<&BigUint>) {
        match (self.encoding, coordinate) {
            (ChallengeEncoding::FixedWidth, Some(c)) => {
                self.hasher.update(to_be_bytes_padded(c, self.width))
            }
            (ChallengeEncoding::FixedWidth, None) => self.hasher.update(vec![0u8; self.width]),
            (ChallengeEncoding::Minimal, Some(c)) => self.hasher.update(to_be_bytes_minimal(c)),
            (ChallengeEncoding::Minimal, None) => {}
        }
    }

    pub fn insert_point(&mut self, pt: &Point) {
        self.insert_coordinate(pt.x());
        self.insert_coordinate(pt.y());
    }

    pub fn insert_message(&mut self, message: &Message) {
        self.hasher.update(to_be_bytes_minimal(message.as_uint()))
    }

    pub fn finalize(self) -> BigUint {
        BigUint::from_bytes_be(&self.hasher.finalize())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sha2::Sha256;

    fn point() -> Point {
        Point::new(BigUint::from(0x0102u32), BigUint::from(0x03u32))
    }

    #[test]
    fn fixed_width_layout() {
        let mut hasher = ChallengeHasher::<Sha256>::new(ChallengeEncoding::FixedWidth, 4);
        hasher.insert_coordinate(Some(&BigUint::from(0xffu32)));
        hasher.insert_point(&point());
        hasher.insert_message(&Message::from(&b"hi"[..]));

        let expected = Sha256::new()
            .chain_update([0u8, 0, 0, 0xff])
            .chain_update([0u8, 0, 1, 2])
            .chain_update([0u8, 0, 0, 3])
            .chain_update(b"hi")
            .finalize();
        assert_eq!(hasher.finalize(), BigUint::from_bytes_be(&expected));
    }

    #[test]
    fn minimal_layout_skips_absent_inputs() {
        let mut hasher = ChallengeHasher::<Sha256>::new(ChallengeEncoding::Minimal, 4);
        hasher.insert_coordinate(Some(&BigUint::from(0u8)));
        hasher.insert_point(&Point::Identity);
        hasher.insert_point(&point());
        hasher.insert_message(&Message::from(&b"hi"[..]));

        let expected = Sha256::digest([1u8, 2, 3, b'h', b'i']);
        assert_eq!(hasher.finalize(), BigUint::from_bytes_be(&expected));
    }

    #[test]
    fn fixed_width_is_unambiguous() {
        // (0x01, 0x0203) and (0x0102, 0x03) collide under the minimal encoding
        let hash = |encoding, a: u32, b: u32| {
            let mut hasher = ChallengeHasher::<Sha256>::new(encoding, 2);
            hasher.insert_coordinate(Some(&BigUint::from(a)));
            hasher.insert_coordinate(Some(&BigUint::from(b)));
            hasher.finalize()
        };
        assert_eq!(
            hash(ChallengeEncoding::Minimal, 0x01, 0x0203),
            hash(ChallengeEncoding::Minimal, 0x0102, 0x03)
        );
        assert_ne!(
            hash(ChallengeEncoding::FixedWidth, 0x01, 0x0203),
            hash(ChallengeEncoding::FixedWidth, 0x0102, 0x03)
        );
    }

    #[test]
    fn encodings_agree_on_full_width_inputs() {
        let hash = |encoding, a: u32, b: u32| {
            let mut hasher = ChallengeHasher::<Sha256>::new(encoding, 2);
            hasher.insert_coordinate(Some(&BigUint::from(a)));
            hasher.insert_coordinate(Some(&BigUint::from(b)));
            hasher.finalize()
        };
        assert_eq!(
            hash(ChallengeEncoding::Minimal, 0x0102, 0x0304),
            hash(ChallengeEncoding::FixedWidth, 0x0102, 0x0304)
        );
        assert_ne!(
            hash(ChallengeEncoding::Minimal, 0x0102, 0x04),
            hash(ChallengeEncoding::FixedWidth, 0x0102, 0x04)
        );
    }

    #[test]
    fn encoding_names() {
        assert_eq!(
            serde_json::to_string(&ChallengeEncoding::FixedWidth).unwrap(),
            "\"fixed-width\""
        );
        assert_eq!(
            serde_json::from_str::<ChallengeEncoding>("\"minimal\"").unwrap(),
            ChallengeEncoding::Minimal
        );
    }
}
