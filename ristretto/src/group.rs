use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use curve25519_dalek::scalar::Scalar;

/// Prime-order group operations needed by the signature layer.
pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    /// The neutral element.
    fn identity() -> Self;

    /// Returns `true` for the neutral element.
    fn is_identity(&self) -> bool;

    /// The Ristretto255 basepoint.
    fn generator() -> Self;

    /// Multiplies the group generator by `scalar` in constant time.
    fn mul_generator(scalar: &Scalar) -> Self;

    /// Multiplies `self` by `scalar` in constant time.
    fn scalar_mul(&self, scalar: &Scalar) -> Self;

    #[inline]
    fn negate(&self) -> Self {
        -*self
    }
}
