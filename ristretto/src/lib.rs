//! Ristretto255 prime-order group over Curve25519.
//!
//! This crate is the narrow seam between the signature code and the group
//! arithmetic provided by `curve25519-dalek`. It exposes compressed/decompressed
//! points, a scalar byte-conversion trait, the variable-time double-scalar
//! multiplication used by verifiers and helpers for random sampling.

mod errors;
mod group;
mod msm;
mod point;
mod random;
mod scalarfield;

pub use curve25519_dalek::scalar::Scalar as ScalarField;
pub use errors::PointError;
pub use group::Group;
pub use msm::double_scalar_mul_basepoint;
pub use point::{Point, POINT_SIZE};
pub use random::random_scalar;
pub use scalarfield::{ScalarBytes, SCALAR_SIZE};
