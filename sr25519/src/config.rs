//! Verification policy.

use serde::{Deserialize, Serialize};

/// Options controlling how strictly signatures are checked.
///
/// The default matches deployed sr25519 verifiers: the response scalar `s` is
/// reduced modulo the group order before use, so an `s` that is congruent to
/// the right value but not fully reduced still verifies. Building with the
/// `strict-scalar` feature flips the default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Reject signatures whose `s` is not the canonical encoding of a scalar
    /// below the group order.
    pub strict_scalar: bool,
}

impl VerifyConfig {
    /// A configuration that rejects non-canonical `s` values.
    pub const STRICT: Self = Self {
        strict_scalar: true,
    };

    /// A configuration that reduces `s` and accepts it.
    pub const LENIENT: Self = Self {
        strict_scalar: false,
    };
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            strict_scalar: cfg!(feature = "strict-scalar"),
        }
    }
}
