//! Schnorr signatures over Ristretto255 with hierarchical key derivation.
//!
//! This library implements the sr25519 scheme used by Substrate-based chains:
//! - Ristretto255 as the prime-order group
//! - Merlin transcripts for Fiat-Shamir challenges and domain separation
//! - Hedged nonces mixing secret witnesses with fresh entropy
//! - Hard and soft HDKD over keypairs, and soft HDKD over public keys alone
//!
//! # Example
//!
//! ```
//! use sr25519::{ChainCode, Keypair};
//!
//! let mut rng = rand::thread_rng();
//!
//! // Expand a keypair from a 32-byte seed
//! let keypair = Keypair::from_seed(&[7u8; 32]).expect("32-byte seed");
//!
//! // Sign and verify
//! let signature = keypair.sign(&mut rng, b"transfer 10");
//! assert!(keypair.public().verify(b"transfer 10", &signature));
//! assert!(!keypair.public().verify(b"transfer 11", &signature));
//!
//! // Soft derivation agrees between the secret and public side
//! let cc = ChainCode([1u8; 32]);
//! let (child, _) = keypair.derive_soft(&mut rng, Some(&cc));
//! let (child_public, _) = keypair.public().derive_soft(Some(&cc));
//! assert_eq!(child.public(), &child_public);
//! ```
//!
//! # Byte layouts
//!
//! | Type            | Size | Layout                        |
//! |-----------------|------|-------------------------------|
//! | `MiniSecretKey` | 32   | seed                          |
//! | `ChainCode`     | 32   | opaque                        |
//! | `SecretKey`     | 64   | scalar ‖ nonce                |
//! | `Keypair`       | 96   | scalar ‖ nonce ‖ public       |
//! | `PublicKey`     | 32   | compressed Ristretto255 point |
//! | `Signature`     | 64   | `R` ‖ `s`, marker in bit 511  |
//!
//! Exported secret scalars are multiplied by the cofactor 8, as ed25519
//! expanded keys are.
//!
//! # Security Considerations
//!
//! - Pass a cryptographically secure RNG to signing and soft derivation
//! - Secret keys, seeds and intermediate values are zeroized when dropped
//! - Verification runs in variable time; it only handles public data

mod cofactor;
mod config;
mod constants;
mod derive;
mod errors;
mod expand;
mod keys;
mod serialization;
mod signatures;
mod transcript;


pub use config::VerifyConfig;
pub use constants::{
    CHAIN_CODE_SIZE, KEYPAIR_SIZE, MINI_SECRET_KEY_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE,
    SIGNATURE_SIZE,
};
pub use derive::{ChainCode, DeriveJunction};
pub use errors::Sr25519Error;
pub use keys::{Keypair, MiniSecretKey, PublicKey, SecretKey};
pub use signatures::{Signature, verify_bytes};
