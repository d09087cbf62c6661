//! Byte conversions for scalars modulo the Ristretto255 group order
//! ℓ = 2^252 + 27742317777372353535851937790883648493.

use curve25519_dalek::scalar::Scalar;

/// Size of an encoded scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Little-endian byte conversions used by the signature layer.
pub trait ScalarBytes: Sized {
    /// Reduces a 512-bit little-endian integer modulo ℓ.
    fn reduce_wide(bytes: &[u8; 64]) -> Self;

    /// Interprets 256 raw little-endian bits as an integer and reduces it
    /// modulo ℓ. Any 256-bit value is accepted.
    fn from_raw_bytes(bytes: [u8; SCALAR_SIZE]) -> Self;

    /// Accepts only the canonical encoding of a value below ℓ.
    fn from_canonical_bytes(bytes: [u8; SCALAR_SIZE]) -> Option<Self>;

    /// Encodes the reduced value as 32 little-endian bytes.
    fn to_le_bytes(&self) -> [u8; SCALAR_SIZE];
}

impl ScalarBytes for Scalar {
    #[inline]
    fn reduce_wide(bytes: &[u8; 64]) -> Self {
        Scalar::from_bytes_mod_order_wide(bytes)
    }

    #[inline]
    fn from_raw_bytes(bytes: [u8; SCALAR_SIZE]) -> Self {
        Scalar::from_bytes_mod_order(bytes)
    }

    #[inline]
    fn from_canonical_bytes(bytes: [u8; SCALAR_SIZE]) -> Option<Self> {
        Scalar::from_canonical_bytes(bytes).into()
    }

    #[inline]
    fn to_le_bytes(&self) -> [u8; SCALAR_SIZE] {
        self.to_bytes()
    }
}
