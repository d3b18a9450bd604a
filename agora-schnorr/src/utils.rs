use crate::U256;

use bigint::Encoding;
use num_bigint::BigUint;
use num_traits::Zero;

/// Big-endian bytes of `n` left-padded with zeros to `width`. Values wider
/// than `width` are written in full.
pub fn to_be_bytes_padded(n: &BigUint, width: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    if bytes.len() >= width {
        return bytes;
    }
    let mut padded = vec![0u8; width - bytes.len()];
    padded.extend_from_slice(&bytes);
    padded
}

/// Big-endian bytes without leading zeros, zero being the empty string.
pub fn to_be_bytes_minimal(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}

pub fn u256_to_biguint(n: &U256) -> BigUint {
    BigUint::from_bytes_be(&n.to_be_bytes())
}

/// Returns `None` if `n` does not fit into 256 bits.
pub fn biguint_to_u256(n: &BigUint) -> Option<U256> {
    let bytes = to_be_bytes_padded(n, 32);
    (bytes.len() == 32).then(|| U256::from_be_slice(&bytes))
}
