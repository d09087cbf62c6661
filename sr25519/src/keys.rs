//! Seeds, secret keys, public keys and keypairs.

use core::fmt::{self, Debug, Formatter};

use rand::{CryptoRng, RngCore};
use ristretto::{Group, Point, ScalarBytes, ScalarField};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::cofactor::{divide_by_cofactor, multiply_by_cofactor};
use crate::constants::{
    KEYPAIR_SIZE, MINI_SECRET_KEY_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_KEY_SIZE, SECRET_KEY_NONCE_SIZE,
    SECRET_KEY_SIZE,
};
use crate::errors::{Sr25519Error, to_array};
use crate::expand::expand_ed25519;

/// A 32-byte seed from which a keypair is expanded.
///
/// # Example
///
/// ```
/// use sr25519::MiniSecretKey;
///
/// let seed = MiniSecretKey::from_bytes(&[0u8; 32]).expect("32 bytes");
/// let keypair = seed.expand_to_keypair();
/// assert_eq!(keypair, seed.expand_to_keypair());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MiniSecretKey(pub(crate) [u8; MINI_SECRET_KEY_SIZE]);

/// The secret half of a keypair: a scalar and a nonce-generation witness.
///
/// The scalar is held multiplied by the cofactor, exactly as it is exported.
/// Arithmetic always works on the divided value obtained through
/// [`SecretKey::scalar`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) key: [u8; SECRET_KEY_KEY_SIZE],
    pub(crate) nonce: [u8; SECRET_KEY_NONCE_SIZE],
}

/// A compressed Ristretto255 public key.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(pub(crate) Point);

/// A secret key together with its public key.
///
/// A `Keypair` can only be built by expansion, derivation or from bytes that
/// pass a consistency check, so its two halves always match.
#[derive(Clone)]
pub struct Keypair {
    pub(crate) secret: SecretKey,
    pub(crate) public: PublicKey,
}

impl MiniSecretKey {
    /// Wraps 32 bytes of seed material.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sr25519Error> {
        Ok(Self(to_array("MiniSecretKey", bytes)?))
    }

    /// Samples a fresh seed from `rng`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut seed = Self([0u8; MINI_SECRET_KEY_SIZE]);
        rng.fill_bytes(&mut seed.0);
        seed
    }

    /// Borrows the seed bytes.
    pub fn as_bytes(&self) -> &[u8; MINI_SECRET_KEY_SIZE] {
        &self.0
    }

    /// Copies the seed out. The copy is not wiped on drop.
    pub fn to_bytes(&self) -> [u8; MINI_SECRET_KEY_SIZE] {
        self.0
    }

    /// Expands the seed into a secret key with ed25519-style clamping.
    pub fn expand(&self) -> SecretKey {
        let (key, nonce) = expand_ed25519(&self.0);
        SecretKey::from_divided(&key, &nonce)
    }

    /// Expands the seed and computes the matching public key.
    pub fn expand_to_keypair(&self) -> Keypair {
        let (key, nonce) = expand_ed25519(&self.0);
        Keypair::from_divided(&key, &nonce)
    }
}

impl SecretKey {
    /// Builds a secret key from a divided scalar, storing it multiplied.
    pub(crate) fn from_divided(key: &[u8; 32], nonce: &[u8; 32]) -> Self {
        let mut stored = Zeroizing::new(*key);
        multiply_by_cofactor(&mut stored);
        Self {
            key: *stored,
            nonce: *nonce,
        }
    }

    /// Decodes the 64-byte `scalar ‖ nonce` layout.
    ///
    /// The scalar must be a multiple of the cofactor, as every exported
    /// sr25519 scalar is.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sr25519Error> {
        let bytes = Zeroizing::new(to_array::<SECRET_KEY_SIZE>("SecretKey", bytes)?);
        if bytes[0] & 0b0000_0111 != 0 {
            return Err(Sr25519Error::ScalarNotCofactorMultiple);
        }

        let mut secret = Self {
            key: [0u8; 32],
            nonce: [0u8; 32],
        };
        secret.key.copy_from_slice(&bytes[..32]);
        secret.nonce.copy_from_slice(&bytes[32..]);
        Ok(secret)
    }

    /// Encodes the secret key as `scalar ‖ nonce`, scalar multiplied by the cofactor.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_SIZE] {
        let mut out = [0u8; SECRET_KEY_SIZE];
        out[..32].copy_from_slice(&self.key);
        out[32..].copy_from_slice(&self.nonce);
        out
    }

    /// The scalar bytes divided by the cofactor, as used by key derivation.
    pub(crate) fn divided_key(&self) -> Zeroizing<[u8; 32]> {
        let mut key = Zeroizing::new(self.key);
        divide_by_cofactor(&mut key);
        key
    }

    /// The secret scalar used for signing.
    pub fn scalar(&self) -> Zeroizing<ScalarField> {
        Zeroizing::new(ScalarField::from_raw_bytes(*self.divided_key()))
    }

    /// Computes the public key belonging to this secret.
    pub fn to_public(&self) -> PublicKey {
        PublicKey(Point::mul_generator(&self.scalar()))
    }
}

impl PublicKey {
    /// Decodes a compressed Ristretto255 point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sr25519Error> {
        Point::from_slice(bytes)
            .map(PublicKey)
            .map_err(|err| Sr25519Error::from_point_error("PublicKey", err))
    }

    /// The compressed Ristretto255 encoding.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.0.as_bytes()
    }

    /// Copies out the compressed Ristretto255 encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0.to_bytes()
    }

    pub(crate) fn as_point(&self) -> &Point {
        &self.0
    }
}

impl Keypair {
    /// Builds a keypair from a divided scalar, computing the public key before
    /// the scalar is multiplied for storage.
    pub(crate) fn from_divided(key: &[u8; 32], nonce: &[u8; 32]) -> Self {
        let scalar = Zeroizing::new(ScalarField::from_raw_bytes(*key));
        Self {
            secret: SecretKey::from_divided(key, nonce),
            public: PublicKey(Point::mul_generator(&scalar)),
        }
    }

    /// Expands a 32-byte seed into a keypair.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Sr25519Error> {
        Ok(MiniSecretKey::from_bytes(seed)?.expand_to_keypair())
    }

    /// Generates a keypair from a fresh random seed.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        MiniSecretKey::generate(rng).expand_to_keypair()
    }

    /// Decodes the 96-byte `scalar ‖ nonce ‖ public` layout.
    ///
    /// Fails unless the public key is the one the secret scalar produces.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sr25519Error> {
        let bytes = Zeroizing::new(to_array::<KEYPAIR_SIZE>("Keypair", bytes)?);
        let secret = SecretKey::from_bytes(&bytes[..SECRET_KEY_SIZE])?;
        let public = PublicKey::from_bytes(&bytes[SECRET_KEY_SIZE..])?;

        if !bool::from(secret.to_public().0.ct_eq(&public.0)) {
            tracing::debug!("rejecting keypair whose public key does not match its secret");
            return Err(Sr25519Error::KeypairMismatch);
        }

        Ok(Self { secret, public })
    }

    /// Encodes the keypair as `scalar ‖ nonce ‖ public`.
    pub fn to_bytes(&self) -> [u8; KEYPAIR_SIZE] {
        let mut out = [0u8; KEYPAIR_SIZE];
        out[..SECRET_KEY_SIZE].copy_from_slice(&self.secret.to_bytes());
        out[SECRET_KEY_SIZE..].copy_from_slice(self.public.as_bytes());
        out
    }

    /// The public half.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// The secret half.
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(secret: &SecretKey) -> Self {
        secret.to_public()
    }
}

impl From<SecretKey> for Keypair {
    fn from(secret: SecretKey) -> Self {
        let public = secret.to_public();
        Self { secret, public }
    }
}

// Secrets compare in constant time and never print their bytes.

impl PartialEq for MiniSecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for MiniSecretKey {}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        (self.key[..].ct_eq(&other.key[..]) & self.nonce[..].ct_eq(&other.nonce[..])).into()
    }
}

impl Eq for SecretKey {}

impl PartialEq for Keypair {
    fn eq(&self, other: &Self) -> bool {
        self.secret == other.secret && self.public == other.public
    }
}

impl Eq for Keypair {}

impl Debug for MiniSecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("MiniSecretKey(..)")
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({:?})", self.0)
    }
}

impl Debug for Keypair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_scalar_is_cofactor_multiple() {
        let keypair = Keypair::from_seed(&[9u8; 32]).expect("seed");
        assert_eq!(keypair.secret.key[0] & 0b0000_0111, 0);
        assert_eq!(keypair.secret.to_public(), keypair.public);
    }

    #[test]
    fn test_generate_takes_seed_from_rng() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mini = MiniSecretKey::generate(&mut StdRng::seed_from_u64(7));
        let mut expected = [0u8; MINI_SECRET_KEY_SIZE];
        StdRng::seed_from_u64(7).fill_bytes(&mut expected);

        assert_eq!(mini.as_bytes(), &expected);
        assert_ne!(mini.to_bytes(), [0u8; MINI_SECRET_KEY_SIZE]);
    }

    #[test]
    fn test_keypair_bytes_round_trip() {
        let keypair = Keypair::from_seed(&[1u8; 32]).expect("seed");
        let bytes = keypair.to_bytes();
        assert_eq!(&bytes[64..], keypair.public.as_bytes());
        assert_eq!(Keypair::from_bytes(&bytes).expect("decode"), keypair);
    }

    #[test]
    fn test_keypair_rejects_foreign_public_key() {
        let a = Keypair::from_seed(&[1u8; 32]).expect("seed");
        let b = Keypair::from_seed(&[2u8; 32]).expect("seed");
        let mut bytes = a.to_bytes();
        bytes[64..].copy_from_slice(b.public.as_bytes());
        assert_eq!(Keypair::from_bytes(&bytes), Err(Sr25519Error::KeypairMismatch));
    }

    #[test]
    fn test_secret_key_rejects_low_bits() {
        let mut bytes = [0u8; SECRET_KEY_SIZE];
        bytes[0] = 1;
        assert_eq!(
            SecretKey::from_bytes(&bytes),
            Err(Sr25519Error::ScalarNotCofactorMultiple)
        );
    }

    #[test]
    fn test_length_errors() {
        assert_eq!(
            MiniSecretKey::from_bytes(&[0u8; 31]),
            Err(Sr25519Error::BytesLength {
                name: "MiniSecretKey",
                length: 32
            })
        );
        assert_eq!(
            Keypair::from_bytes(&[0u8; 95]),
            Err(Sr25519Error::BytesLength {
                name: "Keypair",
                length: 96
            })
        );
        assert_eq!(
            PublicKey::from_bytes(&[0u8; 33]),
            Err(Sr25519Error::BytesLength {
                name: "PublicKey",
                length: 32
            })
        );
    }

    #[test]
    fn test_debug_hides_secrets() {
        let keypair = Keypair::from_seed(&[3u8; 32]).expect("seed");
        let printed = format!("{:?}", keypair);
        assert!(printed.starts_with("Keypair { public: PublicKey(Point("));
        assert!(printed.ends_with(".. }"));
        assert_eq!(format!("{:?}", keypair.secret), "SecretKey(..)");
    }
}
