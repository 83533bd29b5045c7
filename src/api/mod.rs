//! HTTP client layer for the ZamIO publisher API.

pub mod client;
pub mod error_body;
pub mod types;

pub use client::OnboardingClient;
pub use error_body::{extract_error_message, GENERIC_ERROR_MESSAGE};
pub use types::{
    CompleteOnboardingRequest, PaymentRequest, ProfileForm, RevenueSplitRequest, SkipRequest,
    StepAdvance,
};
