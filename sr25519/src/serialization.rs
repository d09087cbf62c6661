//! Serde support through the fixed byte layouts.
//!
//! Every type serializes as a byte string and deserializes through its
//! `from_bytes`, so the same validation applies to both paths.

use core::fmt;

use serde::de::{Error as SerdeError, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::constants::{
    CHAIN_CODE_SIZE, KEYPAIR_SIZE, MINI_SECRET_KEY_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE,
    SIGNATURE_SIZE,
};
use crate::derive::ChainCode;
use crate::keys::{Keypair, MiniSecretKey, PublicKey, SecretKey};
use crate::signatures::Signature;

macro_rules! serde_bytes {
    ($ty:ident, $len:expr, $desc:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let bytes = Zeroizing::new(self.to_bytes());
                serializer.serialize_bytes(&bytes[..])
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct BytesVisitor;

                impl<'de> Visitor<'de> for BytesVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "{} bytes of {}", $len, $desc)
                    }

                    fn visit_bytes<E: SerdeError>(self, bytes: &[u8]) -> Result<$ty, E> {
                        $ty::from_bytes(bytes).map_err(E::custom)
                    }

                    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<$ty, A::Error> {
                        let mut bytes = Zeroizing::new([0u8; $len]);
                        for (i, byte) in bytes.iter_mut().enumerate() {
                            *byte = seq
                                .next_element()?
                                .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                        }
                        $ty::from_bytes(&bytes[..]).map_err(A::Error::custom)
                    }
                }

                deserializer.deserialize_bytes(BytesVisitor)
            }
        }
    };
}

serde_bytes!(MiniSecretKey, MINI_SECRET_KEY_SIZE, "an sr25519 mini secret key");
serde_bytes!(SecretKey, SECRET_KEY_SIZE, "an sr25519 secret key");
serde_bytes!(PublicKey, PUBLIC_KEY_SIZE, "an sr25519 public key");
serde_bytes!(Keypair, KEYPAIR_SIZE, "an sr25519 keypair");
serde_bytes!(Signature, SIGNATURE_SIZE, "an sr25519 signature");
serde_bytes!(ChainCode, CHAIN_CODE_SIZE, "a derivation chain code");

#[cfg(test)]
mod tests {
    use crate::{ChainCode, Keypair, PublicKey, Signature};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bincode_round_trips() {
        let mut rng = StdRng::seed_from_u64(5);
        let keypair = Keypair::generate(&mut rng);
        let sig = keypair.sign(&mut rng, b"serde");

        let kp_bytes = bincode::serialize(&keypair).expect("serialize keypair");
        let pk_bytes = bincode::serialize(keypair.public()).expect("serialize public");
        let sig_bytes = bincode::serialize(&sig).expect("serialize signature");

        let kp: Keypair = bincode::deserialize(&kp_bytes).expect("deserialize keypair");
        let pk: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize public");
        let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize signature");

        assert_eq!(kp, keypair);
        assert_eq!(&pk, keypair.public());
        assert!(pk.verify(b"serde", &sig2));
    }

    #[test]
    fn test_deserialize_validates() {
        let bytes = bincode::serialize(&ChainCode([1u8; 32])).expect("serialize");
        let cc: ChainCode = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(cc, ChainCode([1u8; 32]));

        // A byte string of the right length that is not a Ristretto point.
        let bad = bincode::serialize(&ChainCode([0xff; 32])).expect("serialize");
        assert!(bincode::deserialize::<PublicKey>(&bad).is_err());
    }
}
