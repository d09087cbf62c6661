//! Division and multiplication of little-endian scalar bytes by the cofactor 8.
//!
//! Secret scalars are exported multiplied by the cofactor (ed25519 style) and
//! used for arithmetic divided by it. Both directions are plain three-bit
//! shifts across the byte array.

/// Shifts `scalar` right by three bits, carrying from the most significant byte down.
pub(crate) fn divide_by_cofactor(scalar: &mut [u8; 32]) {
    let mut low = 0u8;
    for byte in scalar.iter_mut().rev() {
        let r = *byte & 0b0000_0111;
        *byte >>= 3;
        *byte += low;
        low = r << 5;
    }
}

/// Shifts `scalar` left by three bits, carrying from the least significant byte up.
///
/// Bits shifted out of the top byte are lost; callers only pass scalars below 2^253.
pub(crate) fn multiply_by_cofactor(scalar: &mut [u8; 32]) {
    let mut high = 0u8;
    for byte in scalar.iter_mut() {
        let r = *byte & 0b1110_0000;
        *byte <<= 3;
        *byte += high;
        high = r >> 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_divide_carries_between_bytes() {
        let mut scalar = [0u8; 32];
        scalar[1] = 0b0000_0101;
        divide_by_cofactor(&mut scalar);

        let mut expected = [0u8; 32];
        expected[0] = 0b1010_0000;
        assert_eq!(scalar, expected);
    }

    #[test]
    fn test_multiply_carries_between_bytes() {
        let mut scalar = [0u8; 32];
        scalar[0] = 0b1010_0001;
        multiply_by_cofactor(&mut scalar);

        let mut expected = [0u8; 32];
        expected[0] = 0b0000_1000;
        expected[1] = 0b0000_0101;
        assert_eq!(scalar, expected);
    }

    #[test]
    fn test_multiply_drops_top_bits() {
        let mut scalar = [0u8; 32];
        scalar[31] = 0b1110_0000;
        multiply_by_cofactor(&mut scalar);
        assert_eq!(scalar, [0u8; 32]);
    }

    proptest! {
        #[test]
        fn divide_then_multiply_restores_cofactor_multiples(mut bytes in any::<[u8; 32]>()) {
            bytes[0] &= 0b1111_1000;
            let mut scalar = bytes;
            divide_by_cofactor(&mut scalar);
            multiply_by_cofactor(&mut scalar);
            prop_assert_eq!(scalar, bytes);
        }

        #[test]
        fn multiply_then_divide_restores_small_scalars(mut bytes in any::<[u8; 32]>()) {
            bytes[31] &= 0b0001_1111;
            let mut scalar = bytes;
            multiply_by_cofactor(&mut scalar);
            prop_assert_eq!(scalar[0] & 0b0000_0111, 0);
            divide_by_cofactor(&mut scalar);
            prop_assert_eq!(scalar, bytes);
        }
    }
}
