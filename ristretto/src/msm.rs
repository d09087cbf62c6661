use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;

use crate::Point;

/// Compute a * P + b * G in variable time.
///
/// Only for public inputs: the running time depends on the scalars.
pub fn double_scalar_mul_basepoint(a: &Scalar, point: &Point, b: &Scalar) -> Point {
    Point::from_point(RistrettoPoint::vartime_double_scalar_mul_basepoint(
        a,
        point.as_point(),
        b,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Group, random_scalar};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_matches_constant_time_path() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let p = Point::mul_generator(&random_scalar(&mut rng));

        let expected = p.scalar_mul(&a) + Point::mul_generator(&b);
        assert_eq!(double_scalar_mul_basepoint(&a, &p, &b), expected);
    }
}
