//! Error types for point decoding.

use thiserror::Error;

/// Errors that can occur while decoding group elements.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointError {
    /// The bytes are not the canonical encoding of a Ristretto255 point.
    #[error("bytes are not a valid Ristretto255 point encoding")]
    InvalidEncoding,

    /// The input slice has the wrong length.
    #[error("a compressed point must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}
