//! Hierarchical deterministic key derivation.
//!
//! Hard derivation hashes the secret scalar into a brand-new seed, so the
//! child is unrelated to the parent for anyone without the parent secret.
//! Soft derivation adds a public offset to the parent: the offset depends only
//! on the parent public key and the chain code, which is what lets
//! [`PublicKey::derive_soft`] agree with [`Keypair::derive_soft`].

use merlin::Transcript;
use rand::{CryptoRng, RngCore};
use ristretto::{Group, Point, ScalarBytes, ScalarField};
use zeroize::Zeroizing;

use crate::constants::{CHAIN_CODE_SIZE, HDKD_CHAIN_CODE, HDKD_HARD, HDKD_NONCE, HDKD_SCALAR};
use crate::constants::{PUBLIC_KEY, SECRET_KEY};
use crate::errors::{Sr25519Error, to_array};
use crate::keys::{Keypair, MiniSecretKey, PublicKey, SecretKey};
use crate::transcript::{NonceSynthesizer, TranscriptExt, hdkd_transcript};

/// A 32-byte label that steers derivation at one level of the key tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChainCode(pub [u8; CHAIN_CODE_SIZE]);

impl ChainCode {
    /// Reads a chain code. Any 32 bytes are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sr25519Error> {
        Ok(Self(to_array("ChainCode", bytes)?))
    }

    /// Borrows the raw bytes.
    pub fn as_bytes(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.0
    }

    /// Copies out the raw bytes.
    pub fn to_bytes(&self) -> [u8; CHAIN_CODE_SIZE] {
        self.0
    }
}

/// One step of a derivation path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeriveJunction {
    /// Derivation that needs the secret key.
    Hard(ChainCode),
    /// Derivation that can also be done from the public key.
    Soft(ChainCode),
}

impl DeriveJunction {
    /// The chain code committed at this step, whichever the kind.
    pub fn chain_code(&self) -> &ChainCode {
        match self {
            DeriveJunction::Hard(cc) | DeriveJunction::Soft(cc) => cc,
        }
    }

    /// Returns `true` for [`DeriveJunction::Hard`].
    pub fn is_hard(&self) -> bool {
        matches!(self, DeriveJunction::Hard(_))
    }
}

/// Commits the chain code and parent public key, then squeezes the soft
/// derivation offset and the child chain code.
fn soft_offset(
    t: &mut Transcript,
    public: &PublicKey,
    chain_code: Option<&ChainCode>,
) -> (Zeroizing<ScalarField>, ChainCode) {
    t.commit_chain_code(chain_code);
    t.append_message(PUBLIC_KEY, public.as_bytes());

    let offset = Zeroizing::new(t.challenge_scalar(HDKD_SCALAR));
    let chain_code = ChainCode(*t.challenge_array(HDKD_CHAIN_CODE));
    (offset, chain_code)
}

impl SecretKey {
    /// Hashes the divided secret scalar and chain code into a child seed and chain code.
    pub fn hard_derive_mini_secret_key(
        &self,
        chain_code: Option<&ChainCode>,
    ) -> (MiniSecretKey, ChainCode) {
        let key = self.divided_key();

        let mut t = hdkd_transcript();
        t.commit_chain_code(chain_code);
        t.append_message(SECRET_KEY, &key[..]);

        let mini = MiniSecretKey(*t.challenge_array(HDKD_HARD));
        let chain_code = ChainCode(*t.challenge_array(HDKD_CHAIN_CODE));
        (mini, chain_code)
    }
}

impl Keypair {
    /// Derives a hard child keypair and its chain code.
    ///
    /// # Example
    ///
    /// ```
    /// use sr25519::{ChainCode, Keypair};
    ///
    /// let parent = Keypair::from_seed(&[1u8; 32]).expect("seed");
    /// let (child, _) = parent.derive_hard(Some(&ChainCode([2u8; 32])));
    /// assert_ne!(child.public(), parent.public());
    /// ```
    pub fn derive_hard(&self, chain_code: Option<&ChainCode>) -> (Keypair, ChainCode) {
        tracing::trace!(kind = "hard", "deriving child keypair");
        let (mini, chain_code) = self.secret.hard_derive_mini_secret_key(chain_code);
        (mini.expand_to_keypair(), chain_code)
    }

    /// Derives a soft child keypair and its chain code.
    ///
    /// The child secret scalar is the parent's plus an offset computed from
    /// the parent public key and chain code. The child nonce is synthesized
    /// from the parent secret and fresh entropy drawn from `rng`, so repeated
    /// calls yield the same public key but different nonces.
    pub fn derive_soft<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        chain_code: Option<&ChainCode>,
    ) -> (Keypair, ChainCode) {
        tracing::trace!(kind = "soft", "deriving child keypair");
        let mut t = hdkd_transcript();
        let (offset, chain_code) = soft_offset(&mut t, &self.public, chain_code);

        let parent_key = self.secret.divided_key();
        let child = Zeroizing::new(ScalarField::from_raw_bytes(*parent_key) + *offset);
        let child_key = Zeroizing::new(child.to_le_bytes());

        let mut witness = Zeroizing::new([0u8; 64]);
        witness[..32].copy_from_slice(&parent_key[..]);
        witness[32..].copy_from_slice(&self.secret.nonce);

        let nonce = NonceSynthesizer::new(&t)
            .commit_witness(HDKD_NONCE, &self.secret.nonce)
            .commit_witness(HDKD_NONCE, &witness[..])
            .finalize(rng)
            .extract::<32>();

        (Keypair::from_divided(&child_key, &nonce), chain_code)
    }

    /// Walks a derivation path from this keypair.
    ///
    /// Each junction's chain code drives its step; the chain codes produced
    /// along the way are dropped.
    pub fn derive_path<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        path: &[DeriveJunction],
    ) -> Keypair {
        path.iter().fold(self.clone(), |parent, junction| match junction {
            DeriveJunction::Hard(cc) => parent.derive_hard(Some(cc)).0,
            DeriveJunction::Soft(cc) => parent.derive_soft(rng, Some(cc)).0,
        })
    }
}

impl PublicKey {
    /// Derives a soft child public key and its chain code without any secret.
    ///
    /// # Example
    ///
    /// ```
    /// use sr25519::{ChainCode, Keypair};
    ///
    /// let mut rng = rand::thread_rng();
    /// let parent = Keypair::from_seed(&[1u8; 32]).expect("seed");
    /// let cc = ChainCode([0u8; 32]);
    ///
    /// let (from_secret, _) = parent.derive_soft(&mut rng, Some(&cc));
    /// let (from_public, _) = parent.public().derive_soft(Some(&cc));
    /// assert_eq!(from_secret.public(), &from_public);
    /// ```
    pub fn derive_soft(&self, chain_code: Option<&ChainCode>) -> (PublicKey, ChainCode) {
        let mut t = hdkd_transcript();
        let (offset, chain_code) = soft_offset(&mut t, self, chain_code);
        let child = *self.as_point() + Point::mul_generator(&offset);
        (PublicKey(child), chain_code)
    }

    /// Walks a derivation path from this public key. Every junction must be soft.
    pub fn derive_path(&self, path: &[DeriveJunction]) -> Result<PublicKey, Sr25519Error> {
        path.iter().try_fold(*self, |parent, junction| match junction {
            DeriveJunction::Soft(cc) => Ok(parent.derive_soft(Some(cc)).0),
            DeriveJunction::Hard(_) => {
                tracing::debug!("hard junction in a public derivation path");
                Err(Sr25519Error::HardJunctionOnPublicKey)
            }
        })
    }
}
