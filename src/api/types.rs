//! Wire types for the publisher onboarding endpoints.

use serde::{Deserialize, Serialize};

/// Every successful response wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Response to a step-completion or skip call.
///
/// `next_step` is the server's recommendation for what to show next;
/// `redirect_step` (skip only) overrides where the client should actually
/// go, and is authoritative when present. `skipped_step` echoes the step
/// the server recorded as skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct StepAdvance {
    #[serde(default)]
    pub next_step: Option<String>,
    #[serde(default)]
    pub redirect_step: Option<String>,
    #[serde(default)]
    pub skipped_step: Option<String>,
}

/// Multipart payload for the profile step.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub publisher_id: String,
    pub company_name: String,
    pub country: String,
    pub region: Option<String>,
    /// Company logo as (file name, bytes), if the publisher uploaded one.
    pub logo: Option<(String, Vec<u8>)>,
}

/// JSON payload for the revenue-split step.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueSplitRequest {
    pub publisher_id: String,
    /// Writer share of royalties, percent.
    pub writer_split: f64,
    /// Publisher share of royalties, percent.
    pub publisher_split: f64,
}

/// JSON payload for the payment step.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    pub publisher_id: String,
    /// "momo" or "bank".
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momo_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momo_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

/// JSON payload for a skip request.
#[derive(Debug, Clone, Serialize)]
pub struct SkipRequest {
    pub publisher_id: String,
    pub step: String,
}

/// JSON payload for the final completion call.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteOnboardingRequest {
    pub publisher_id: String,
}
