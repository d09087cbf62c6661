//! Sizes of the fixed byte layouts and the protocol's domain-separation labels.
//!
//! Every label below is hashed into a transcript; changing a single byte breaks
//! compatibility with every other sr25519 implementation.

/// Size of a `MiniSecretKey` seed in bytes.
pub const MINI_SECRET_KEY_SIZE: usize = 32;

/// Size of a derivation `ChainCode` in bytes.
pub const CHAIN_CODE_SIZE: usize = 32;

/// Size of the scalar half of a secret key in bytes.
pub(crate) const SECRET_KEY_KEY_SIZE: usize = 32;

/// Size of the nonce half of a secret key in bytes.
pub(crate) const SECRET_KEY_NONCE_SIZE: usize = 32;

/// Size of a serialized secret key: scalar (32) followed by nonce (32).
pub const SECRET_KEY_SIZE: usize = SECRET_KEY_KEY_SIZE + SECRET_KEY_NONCE_SIZE;

/// Size of a compressed Ristretto255 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a serialized keypair: secret key (64) followed by public key (32).
pub const KEYPAIR_SIZE: usize = SECRET_KEY_SIZE + PUBLIC_KEY_SIZE;

/// Size of a signature: compressed point `R` (32) followed by scalar `s` (32).
pub const SIGNATURE_SIZE: usize = 64;

/// Bit of the last signature byte that marks an sr25519 (not ed25519) signature.
pub(crate) const SIGNATURE_MARKER: u8 = 0b1000_0000;

pub(crate) const HDKD_CONTEXT: &[u8] = b"SchnorrRistrettoHDKD";
pub(crate) const SIGNING_CONTEXT: &[u8] = b"SigningContext";

pub(crate) const SIGN_BYTES: &[u8] = b"sign-bytes";
pub(crate) const CHAIN_CODE: &[u8] = b"chain-code";
pub(crate) const SECRET_KEY: &[u8] = b"secret-key";
pub(crate) const PUBLIC_KEY: &[u8] = b"public-key";
pub(crate) const HDKD_HARD: &[u8] = b"HDKD-hard";
pub(crate) const HDKD_CHAIN_CODE: &[u8] = b"HDKD-chaincode";
pub(crate) const HDKD_SCALAR: &[u8] = b"HDKD-scalar";
pub(crate) const HDKD_NONCE: &[u8] = b"HDKD-nonce";

pub(crate) const SUBSTRATE: &[u8] = b"substrate";
pub(crate) const PROTO_NAME: &[u8] = b"proto-name";
pub(crate) const SCHNORR_SIG: &[u8] = b"Schnorr-sig";
pub(crate) const SIGN_PK: &[u8] = b"sign:pk";
pub(crate) const SIGN_R: &[u8] = b"sign:R";
pub(crate) const SIGN_C: &[u8] = b"sign:c";
pub(crate) const SIGNING: &[u8] = b"signing";
