//! Fiat-Shamir transcripts and transcript-seeded nonce generation.
//!
//! Derivation, signing and verification all build their transcripts through
//! this module so that the labels and commitment order can only be written
//! once.

use merlin::{Transcript, TranscriptRng, TranscriptRngBuilder};
use rand::{CryptoRng, RngCore};
use ristretto::{ScalarBytes, ScalarField};
use zeroize::Zeroizing;

use crate::constants::{
    CHAIN_CODE, HDKD_CONTEXT, PROTO_NAME, SCHNORR_SIG, SIGN_BYTES, SIGN_PK, SIGNING_CONTEXT,
    SUBSTRATE,
};
use crate::derive::ChainCode;
use crate::keys::PublicKey;

/// Starts a derivation transcript with its empty `sign-bytes` commitment.
pub(crate) fn hdkd_transcript() -> Transcript {
    let mut t = Transcript::new(HDKD_CONTEXT);
    t.append_message(SIGN_BYTES, b"");
    t
}

/// Builds the transcript shared by signer and verifier, up to the commitment of `R`.
pub(crate) fn signing_transcript(message: &[u8], public: &PublicKey) -> Transcript {
    let mut t = Transcript::new(SIGNING_CONTEXT);
    t.append_message(b"", SUBSTRATE);
    t.append_message(SIGN_BYTES, message);
    t.append_message(PROTO_NAME, SCHNORR_SIG);
    t.append_message(SIGN_PK, public.as_bytes());
    t
}

/// Protocol helpers on top of a raw transcript.
pub(crate) trait TranscriptExt {
    /// Commits the chain code, if there is one.
    fn commit_chain_code(&mut self, chain_code: Option<&ChainCode>);

    /// Squeezes 64 bytes and reduces them to a scalar.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> ScalarField;

    /// Squeezes exactly `N` bytes.
    fn challenge_array<const N: usize>(&mut self, label: &'static [u8]) -> Zeroizing<[u8; N]>;
}

impl TranscriptExt for Transcript {
    fn commit_chain_code(&mut self, chain_code: Option<&ChainCode>) {
        if let Some(chain_code) = chain_code {
            self.append_message(CHAIN_CODE, chain_code.as_bytes());
        }
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> ScalarField {
        let buf = self.challenge_array::<64>(label);
        ScalarField::reduce_wide(&buf)
    }

    fn challenge_array<const N: usize>(&mut self, label: &'static [u8]) -> Zeroizing<[u8; N]> {
        let mut buf = Zeroizing::new([0u8; N]);
        self.challenge_bytes(label, &mut buf[..]);
        buf
    }
}

/// Generates secret nonces from a transcript, secret witnesses and fresh entropy.
///
/// The output depends on all three, so neither a broken entropy source nor a
/// repeated witness alone makes it predictable or repeatable.
pub(crate) struct NonceSynthesizer {
    builder: TranscriptRngBuilder,
}

impl NonceSynthesizer {
    /// Forks the current transcript state; later commitments to `transcript` are not seen.
    pub(crate) fn new(transcript: &Transcript) -> Self {
        Self {
            builder: transcript.build_rng(),
        }
    }

    pub(crate) fn commit_witness(self, label: &'static [u8], witness: &[u8]) -> Self {
        Self {
            builder: self.builder.rekey_with_witness_bytes(label, witness),
        }
    }

    /// Mixes in 32 bytes from `rng` and returns the seeded generator.
    pub(crate) fn finalize<R: RngCore + CryptoRng>(self, rng: &mut R) -> NonceExtractor {
        NonceExtractor {
            rng: self.builder.finalize(rng),
        }
    }
}

/// A finalized nonce generator. Its state is wiped when dropped.
pub(crate) struct NonceExtractor {
    rng: TranscriptRng,
}

impl NonceExtractor {
    pub(crate) fn extract<const N: usize>(&mut self) -> Zeroizing<[u8; N]> {
        let mut out = Zeroizing::new([0u8; N]);
        self.rng.fill_bytes(&mut out[..]);
        out
    }
}
