//! HTTP client for the publisher onboarding endpoints.
//!
//! Thin reqwest wrappers over the seven collaborator endpoints. No
//! retries, no polling; one request per call, with the configured timeout
//! as the only time bound.

use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::onboarding::{OnboardingStatus, StepKey};

use super::error_body::extract_error_message;
use super::types::{
    CompleteOnboardingRequest, Envelope, PaymentRequest, ProfileForm, RevenueSplitRequest,
    SkipRequest, StepAdvance,
};

/// Client for the ZamIO publisher API.
pub struct OnboardingClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OnboardingClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.normalized_base_url())
    }

    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Send a request and unwrap the `{ data: ... }` envelope, extracting
    /// a user-facing message from non-success bodies.
    async fn read_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response =
            self.with_auth(builder)
                .send()
                .await
                .map_err(|e| ApiError::Transport {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            tracing::warn!(endpoint = %endpoint, status = status.as_u16(), "API call failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// GET the onboarding status document for a publisher.
    pub async fn get_status(&self, publisher_id: &str) -> Result<OnboardingStatus, ApiError> {
        let endpoint = self.endpoint(&format!("publisher-onboarding-status/{publisher_id}"));
        self.read_data(&endpoint, self.client.get(&endpoint)).await
    }

    /// Complete the profile step (multipart: text fields plus optional logo).
    pub async fn complete_profile(&self, form: ProfileForm) -> Result<OnboardingStatus, ApiError> {
        let endpoint = self.endpoint("complete-publisher-profile");

        let mut multipart = Form::new()
            .text("publisher_id", form.publisher_id)
            .text("company_name", form.company_name)
            .text("country", form.country);
        if let Some(region) = form.region {
            multipart = multipart.text("region", region);
        }
        if let Some((file_name, bytes)) = form.logo {
            multipart = multipart.part("logo", Part::bytes(bytes).file_name(file_name));
        }

        self.read_data(&endpoint, self.client.post(&endpoint).multipart(multipart))
            .await
    }

    /// Complete the revenue-split step.
    pub async fn complete_revenue_split(
        &self,
        request: &RevenueSplitRequest,
    ) -> Result<StepAdvance, ApiError> {
        let endpoint = self.endpoint("complete-revenue-split");
        self.read_data(&endpoint, self.client.post(&endpoint).json(request))
            .await
    }

    /// Complete the link-artist step.
    pub async fn complete_link_artist(&self, publisher_id: &str) -> Result<StepAdvance, ApiError> {
        let endpoint = self.endpoint("complete-link-artist");
        let body = serde_json::json!({ "publisher_id": publisher_id });
        self.read_data(&endpoint, self.client.post(&endpoint).json(&body))
            .await
    }

    /// Complete the payment step.
    pub async fn complete_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<StepAdvance, ApiError> {
        let endpoint = self.endpoint("complete-publisher-payment");
        self.read_data(&endpoint, self.client.post(&endpoint).json(request))
            .await
    }

    /// Mark a step skipped. The server decides whether the skip is
    /// accepted (required steps are refused server-side) and where the
    /// client should go next.
    pub async fn skip_step(
        &self,
        publisher_id: &str,
        step: StepKey,
    ) -> Result<StepAdvance, ApiError> {
        let endpoint = self.endpoint("skip-publisher-onboarding");
        let request = SkipRequest {
            publisher_id: publisher_id.to_string(),
            step: step.as_str().to_string(),
        };
        self.read_data(&endpoint, self.client.post(&endpoint).json(&request))
            .await
    }

    /// Final completion call once every required step is done.
    pub async fn complete_onboarding(
        &self,
        publisher_id: &str,
    ) -> Result<OnboardingStatus, ApiError> {
        let endpoint = self.endpoint("complete-publisher-onboarding");
        let request = CompleteOnboardingRequest {
            publisher_id: publisher_id.to_string(),
        };
        self.read_data(&endpoint, self.client.post(&endpoint).json(&request))
            .await
    }
}
