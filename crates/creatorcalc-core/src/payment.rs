//! Payment gate in front of the paid pricing report.
//!
//! Checkout is simulated: a session id is minted without contacting any
//! processor. [`PaymentVerifier`] is where a real processor check plugs in;
//! [`unlock_report`] refuses to compute anything until it passes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PaymentError;
use crate::pricing::{build_report, CreatorProfile, PricingReport};

const SESSION_PREFIX: &str = "pay_";
const SESSION_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPlan {
    /// One report.
    Report,
    /// Unlimited reports.
    Lifetime,
}

impl PaymentPlan {
    #[must_use]
    pub fn amount_usd(self) -> u32 {
        match self {
            PaymentPlan::Report => 9,
            PaymentPlan::Lifetime => 299,
        }
    }
}

/// A checkout session identifier of the form `pay_<millis>_<9 base36 chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentSessionId(String);

impl PaymentSessionId {
    /// Mints a new session id from a millisecond timestamp and a random suffix.
    pub fn generate<R: Rng>(now_millis: i64, rng: &mut R) -> Self {
        let suffix: String = (0..SESSION_SUFFIX_LEN)
            .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
            .collect();
        Self(format!("{SESSION_PREFIX}{now_millis}_{suffix}"))
    }

    /// Accepts any non-blank id carrying the `pay_` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::InvalidSession`] for blank or unprefixed ids.
    pub fn parse(raw: &str) -> Result<Self, PaymentError> {
        let trimmed = raw.trim();
        if trimmed.len() <= SESSION_PREFIX.len() || !trimmed.starts_with(SESSION_PREFIX) {
            return Err(PaymentError::InvalidSession(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirms that a session's payment was captured.
pub trait PaymentVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns [`PaymentError::NotConfirmed`] when capture cannot be confirmed.
    fn verify(&self, session: &PaymentSessionId) -> Result<(), PaymentError>;
}

/// Treats every well-formed session as paid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPaymentVerifier;

impl PaymentVerifier for SimulatedPaymentVerifier {
    fn verify(&self, session: &PaymentSessionId) -> Result<(), PaymentError> {
        tracing::debug!(session_id = %session, "simulated payment verification");
        Ok(())
    }
}

/// Verifies the session, then builds the pricing report.
///
/// # Errors
///
/// Returns [`PaymentError`] if the session id is malformed or the verifier
/// rejects it; no price is computed in that case.
pub fn unlock_report<V: PaymentVerifier + ?Sized>(
    verifier: &V,
    raw_session: &str,
    profile: &CreatorProfile,
) -> Result<PricingReport, PaymentError> {
    let session = PaymentSessionId::parse(raw_session)?;
    verifier.verify(&session)?;
    Ok(build_report(profile))
}
