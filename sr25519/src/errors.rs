//! Error types for parsing sr25519 keys and walking derivation paths.

use ristretto::PointError;
use thiserror::Error;

/// Errors that can occur while decoding keys and signatures from bytes.
///
/// Signing and derivation over already-decoded values cannot fail, and
/// verification reports its outcome as a `bool`; only the byte boundary and
/// path walking produce these errors.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sr25519Error {
    /// An input slice has the wrong length for the type being decoded.
    #[error("{name} must be {length} bytes in length")]
    BytesLength {
        /// The type that rejected the input.
        name: &'static str,
        /// The required length in bytes.
        length: usize,
    },

    /// The bytes are not the canonical encoding of a Ristretto255 point.
    #[error("public key is not a valid Ristretto255 point")]
    InvalidPoint,

    /// An exported secret scalar has one of its three low bits set, so it
    /// cannot have been multiplied by the cofactor.
    #[error("secret scalar is not a multiple of the cofactor")]
    ScalarNotCofactorMultiple,

    /// The public half of a keypair does not belong to its secret half.
    #[error("public key does not match the secret key")]
    KeypairMismatch,

    /// A hard derivation step needs the secret key.
    #[error("hard derivation requires a secret key")]
    HardJunctionOnPublicKey,
}

impl Sr25519Error {
    pub(crate) fn from_point_error(name: &'static str, err: PointError) -> Self {
        match err {
            PointError::InvalidEncoding => Sr25519Error::InvalidPoint,
            PointError::Length { expected, .. } => Sr25519Error::BytesLength {
                name,
                length: expected,
            },
        }
    }
}

/// Checks the length of `bytes` and copies them into an array.
pub(crate) fn to_array<const N: usize>(
    name: &'static str,
    bytes: &[u8],
) -> Result<[u8; N], Sr25519Error> {
    bytes
        .try_into()
        .map_err(|_| Sr25519Error::BytesLength { name, length: N })
}
