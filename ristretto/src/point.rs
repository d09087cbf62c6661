//! Ristretto255 points carried in both compressed and decompressed form.
//!
//! Protocol code hashes the 32-byte encoding while arithmetic needs the
//! decompressed point, so `Point` keeps both and only ever builds one from the
//! other.

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::{Identity, IsIdentity};
use subtle::{Choice, ConstantTimeEq};

use crate::errors::PointError;
use crate::group::Group;

/// Size of a compressed Ristretto255 point in bytes.
pub const POINT_SIZE: usize = 32;

/// A Ristretto255 group element together with its canonical encoding.
#[derive(Copy, Clone)]
pub struct Point {
    compressed: CompressedRistretto,
    point: RistrettoPoint,
}

impl Point {
    /// Decodes a point from its canonical 32-byte encoding.
    pub fn from_bytes(bytes: &[u8; POINT_SIZE]) -> Result<Self, PointError> {
        let compressed = CompressedRistretto(*bytes);
        let point = compressed.decompress().ok_or(PointError::InvalidEncoding)?;
        Ok(Self { compressed, point })
    }

    /// Decodes a point from a slice, checking its length first.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PointError> {
        let array: &[u8; POINT_SIZE] = bytes.try_into().map_err(|_| PointError::Length {
            expected: POINT_SIZE,
            actual: bytes.len(),
        })?;
        Self::from_bytes(array)
    }

    /// Wraps a decompressed point, computing its encoding.
    pub fn from_point(point: RistrettoPoint) -> Self {
        Self {
            compressed: point.compress(),
            point,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; POINT_SIZE] {
        self.compressed.as_bytes()
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; POINT_SIZE] {
        self.compressed.to_bytes()
    }

    #[inline]
    pub fn as_point(&self) -> &RistrettoPoint {
        &self.point
    }
}

impl Group for Point {
    #[inline]
    fn identity() -> Self {
        Self::from_point(RistrettoPoint::identity())
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.point.is_identity()
    }

    #[inline]
    fn generator() -> Self {
        Self::from_point(RISTRETTO_BASEPOINT_POINT)
    }

    #[inline]
    fn mul_generator(scalar: &Scalar) -> Self {
        Self::from_point(RistrettoPoint::mul_base(scalar))
    }

    #[inline]
    fn scalar_mul(&self, scalar: &Scalar) -> Self {
        Self::from_point(self.point * scalar)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_point(self.point + rhs.point)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_point(self.point - rhs.point)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_point(-self.point)
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.compressed.ct_eq(&other.compressed)
    }
}

// The encoding is canonical, so comparing bytes is comparing points.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compressed.as_bytes().hash(state);
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point(")?;
        for byte in self.compressed.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_scalar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_encoding_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = Point::mul_generator(&random_scalar(&mut rng));
        let decoded = Point::from_bytes(&p.to_bytes()).expect("decode");
        assert_eq!(p, decoded);
        assert_eq!(p.as_point(), decoded.as_point());
    }

    #[test]
    fn test_rejects_invalid_encoding() {
        // Ristretto encodings must be non-negative field elements; 0xff.. is not.
        assert_eq!(
            Point::from_bytes(&[0xff; POINT_SIZE]),
            Err(PointError::InvalidEncoding)
        );
        assert_eq!(
            Point::from_slice(&[0u8; 31]),
            Err(PointError::Length {
                expected: POINT_SIZE,
                actual: 31
            })
        );
    }

    #[test]
    fn test_identity_encodes_to_zero() {
        let id = Point::identity();
        assert!(id.is_identity());
        assert_eq!(id.to_bytes(), [0u8; POINT_SIZE]);
        assert_eq!(Point::from_bytes(&[0u8; POINT_SIZE]).expect("decode"), id);
    }

    #[test]
    fn test_group_laws() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let pa = Point::mul_generator(&a);
        let pb = Point::mul_generator(&b);

        assert_eq!(pa + pb, Point::mul_generator(&(a + b)));
        assert_eq!(pa - pa, Point::identity());
        assert_eq!(pa + pa.negate(), Point::identity());
        assert_eq!(Point::generator().scalar_mul(&a), pa);
    }
}
