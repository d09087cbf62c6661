//! Signing and verification.

use rand::{CryptoRng, RngCore};
use ristretto::{Group, Point, ScalarBytes, ScalarField, double_scalar_mul_basepoint};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::config::VerifyConfig;
use crate::constants::{SIGN_C, SIGN_R, SIGNATURE_MARKER, SIGNATURE_SIZE, SIGNING};
use crate::errors::{Sr25519Error, to_array};
use crate::keys::{Keypair, PublicKey};
use crate::transcript::{NonceSynthesizer, TranscriptExt, signing_transcript};

/// An sr25519 signature: the commitment `R` followed by the response `s`.
///
/// The top bit of the last byte of `s` is a format marker and is set on every
/// signature this crate produces. A `Signature` is only a container: whether
/// the marker and the values are acceptable is decided by
/// [`PublicKey::verify`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The compressed commitment point `R = r * G`.
    pub r: [u8; 32],
    /// The response scalar `s = k * sk + r` with the marker bit set.
    pub s: [u8; 32],
}

impl Signature {
    /// Splits 64 bytes into `R ‖ s`. Only the length is checked here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sr25519Error> {
        let bytes = to_array::<SIGNATURE_SIZE>("Signature", bytes)?;
        let mut sig = Signature {
            r: [0u8; 32],
            s: [0u8; 32],
        };
        sig.r.copy_from_slice(&bytes[..32]);
        sig.s.copy_from_slice(&bytes[32..]);
        Ok(sig)
    }

    /// Encodes the signature as `R ‖ s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }
}

/// Strips the format marker from `s`, returning `None` if it is missing.
///
/// The masks follow the legacy check deployed verifiers apply: when the high
/// nibble is zero the top bit is cleared once more, and an `s` that still
/// carries bit 255 is rejected. Keep the bit pattern as is.
fn strip_format_marker(s: &[u8; 32]) -> Option<Zeroizing<[u8; 32]>> {
    let mut s = Zeroizing::new(*s);
    if s[31] & SIGNATURE_MARKER == 0 {
        return None;
    }

    s[31] &= 0b0111_1111;
    if s[31] & 0b1111_0000 == 0 {
        s[31] &= 0b0111_1111;
    }
    if s[31] >> 7 != 0 {
        return None;
    }

    Some(s)
}

impl Keypair {
    /// Signs `message`, drawing 32 bytes of fresh entropy from `rng`.
    ///
    /// The nonce is synthesized from the signing transcript, the secret nonce
    /// and that entropy, so even a weak `rng` does not expose the key.
    ///
    /// # Example
    ///
    /// ```
    /// use sr25519::Keypair;
    ///
    /// let mut rng = rand::thread_rng();
    /// let keypair = Keypair::generate(&mut rng);
    /// let signature = keypair.sign(&mut rng, b"hello");
    /// assert!(keypair.public().verify(b"hello", &signature));
    /// ```
    pub fn sign<R: RngCore + CryptoRng>(&self, rng: &mut R, message: &[u8]) -> Signature {
        let key = self.secret.scalar();
        let mut t = signing_transcript(message, &self.public);

        let nonce = NonceSynthesizer::new(&t)
            .commit_witness(SIGNING, &self.secret.nonce)
            .finalize(rng)
            .extract::<32>();
        let mut wide = Zeroizing::new([0u8; 64]);
        wide[..32].copy_from_slice(&nonce[..]);
        let r = Zeroizing::new(ScalarField::reduce_wide(&wide));

        let big_r = Point::mul_generator(&r);
        t.append_message(SIGN_R, big_r.as_bytes());

        let k = Zeroizing::new(t.challenge_scalar(SIGN_C));
        let s = Zeroizing::new(*k * *key + *r);

        let mut sig = Signature {
            r: big_r.to_bytes(),
            s: s.to_le_bytes(),
        };
        sig.s[31] |= SIGNATURE_MARKER;
        sig
    }
}

impl PublicKey {
    /// Verifies `signature` on `message` with the default [`VerifyConfig`].
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_with_config(message, signature, &VerifyConfig::default())
    }

    /// Verifies `signature` on `message`.
    ///
    /// Checks `s * G - k * A == R` where `k` is the transcript challenge.
    /// Everything here is public, so the group arithmetic runs in variable
    /// time; only the final comparison is constant time.
    pub fn verify_with_config(
        &self,
        message: &[u8],
        signature: &Signature,
        config: &VerifyConfig,
    ) -> bool {
        let Some(s_bytes) = strip_format_marker(&signature.s) else {
            tracing::debug!(reason = "missing marker", "signature rejected");
            return false;
        };

        let s = if config.strict_scalar {
            match <ScalarField as ScalarBytes>::from_canonical_bytes(*s_bytes) {
                Some(s) => Zeroizing::new(s),
                None => {
                    tracing::debug!(reason = "non-canonical scalar", "signature rejected");
                    return false;
                }
            }
        } else {
            Zeroizing::new(ScalarField::from_raw_bytes(*s_bytes))
        };

        let mut t = signing_transcript(message, self);
        t.append_message(SIGN_R, &signature.r);
        let k = Zeroizing::new(t.challenge_scalar(SIGN_C));

        let expected = double_scalar_mul_basepoint(&k, &self.as_point().negate(), &s);
        let valid = bool::from(expected.as_bytes()[..].ct_eq(&signature.r[..]));
        if !valid {
            tracing::debug!(reason = "mismatch", "signature rejected");
        }
        valid
    }
}

/// Verifies a signature given entirely as bytes.
///
/// Wrongly sized inputs and public keys that are not valid points are
/// reported as an invalid signature.
pub fn verify_bytes(signature: &[u8], message: &[u8], public: &[u8]) -> bool {
    let (signature, public) = match (Signature::from_bytes(signature), PublicKey::from_bytes(public))
    {
        (Ok(signature), Ok(public)) => (signature, public),
        (Err(err), _) | (_, Err(err)) => {
            tracing::debug!(%err, "signature rejected");
            return false;
        }
    };
    public.verify(message, &signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_required() {
        assert!(strip_format_marker(&[0u8; 32]).is_none());

        let mut s = [0u8; 32];
        s[31] = 0b1000_0001;
        let stripped = strip_format_marker(&s).expect("marker present");
        assert_eq!(stripped[31], 0b0000_0001);
    }

    #[test]
    fn test_marker_strip_keeps_high_nibble() {
        let mut s = [0u8; 32];
        s[31] = 0b1101_0000;
        let stripped = strip_format_marker(&s).expect("marker present");
        assert_eq!(stripped[31], 0b0101_0000);
    }

    #[test]
    fn test_signature_bytes_layout() {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[0] = 1;
        bytes[63] = 2;
        let sig = Signature::from_bytes(&bytes).expect("64 bytes");
        assert_eq!(sig.r[0], 1);
        assert_eq!(sig.s[31], 2);
        assert_eq!(sig.to_bytes(), bytes);
        assert_eq!(
            Signature::from_bytes(&bytes[..63]),
            Err(Sr25519Error::BytesLength {
                name: "Signature",
                length: SIGNATURE_SIZE
            })
        );
    }
}
