//! Expansion of a 32-byte seed into a secret scalar and nonce.

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use crate::cofactor::divide_by_cofactor;

/// Hashes `seed` with SHA-512 and splits the digest into a clamped scalar and a nonce.
///
/// The scalar is clamped the way ed25519 clamps (low three bits cleared, bit
/// 254 set, bit 255 cleared) and then divided by the cofactor, so the value
/// returned is the one used for arithmetic. The nonce is the upper half of the
/// digest, unchanged.
pub(crate) fn expand_ed25519(seed: &[u8; 32]) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let mut hash = Zeroizing::new([0u8; 64]);
    let mut hasher = Sha512::new();
    hasher.update(seed);
    hasher.finalize_into(GenericArray::from_mut_slice(&mut hash[..]));

    let mut key = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&hash[..32]);
    key[0] &= 0b1111_1000;
    key[31] &= 0b0011_1111;
    key[31] |= 0b0100_0000;
    divide_by_cofactor(&mut key);
    key[31] &= 0b0111_1111;

    let mut nonce = Zeroizing::new([0u8; 32]);
    nonce.copy_from_slice(&hash[32..]);

    (key, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_upper_digest_half() {
        let seed = [7u8; 32];
        let digest = Sha512::digest(seed);
        let (_, nonce) = expand_ed25519(&seed);
        assert_eq!(&nonce[..], &digest[32..]);
    }

    #[test]
    fn test_key_is_clamped_then_divided() {
        let seed = [0u8; 32];
        let digest = Sha512::digest(seed);
        let (key, _) = expand_ed25519(&seed);

        // Bit 254 of the clamped value lands on bit 251 after the division.
        assert_eq!(key[31] & 0b1111_0000, 0);
        assert_eq!(key[31] & 0b0000_1000, 0b0000_1000);

        // The bits below the clamped ones are the digest shifted down by three.
        assert_eq!(key[0], (digest[0] >> 3) | ((digest[1] & 0b111) << 5));
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let seed = [42u8; 32];
        assert_eq!(expand_ed25519(&seed), expand_ed25519(&seed));
    }
}
