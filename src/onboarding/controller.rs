//! OnboardingController — coordinates status loading, step submissions,
//! and navigation dispatch.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::{OnboardingClient, PaymentRequest, ProfileForm, RevenueSplitRequest, StepAdvance};
use crate::error::{ApiError, ControllerError, Result, SessionError};

use super::navigate::{continue_target, resolve_route, Router, DEFAULT_STEP};
use super::status::{OnboardingStatus, DONE_STEP};
use super::step::StepKey;

/// What the embedding view renders: a loading flag, the last error string,
/// and the most recently loaded status.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub status: Option<OnboardingStatus>,
}

/// Coordinates the onboarding flow for one publisher session.
///
/// Loads are guarded by a generation counter so a fetch that outlives a
/// newer one cannot clobber the view with stale data. Side-effecting
/// submissions are guarded by an in-flight flag so a double-click cannot
/// send two requests.
pub struct OnboardingController {
    client: Arc<OnboardingClient>,
    router: Arc<dyn Router>,
    publisher_id: Option<String>,
    reload_on_done: bool,
    state: Arc<RwLock<ViewState>>,
    load_generation: AtomicU64,
    submission_in_flight: AtomicBool,
}

/// Clears the in-flight flag when a submission finishes, however it exits.
#[derive(Debug)]
struct SubmissionGuard<'a>(&'a AtomicBool);

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl OnboardingController {
    pub fn new(
        client: Arc<OnboardingClient>,
        router: Arc<dyn Router>,
        publisher_id: Option<String>,
    ) -> Self {
        let reload_on_done = client.config().reload_on_done;
        Self {
            client,
            router,
            publisher_id,
            reload_on_done,
            state: Arc::new(RwLock::new(ViewState::default())),
            load_generation: AtomicU64::new(0),
            submission_in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current view state.
    pub async fn view(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Fetch the status document. One network read per invocation, no
    /// retries. Failures land in the view's error string; a previously
    /// loaded status is kept so the page can still render.
    pub async fn load_status(&self) -> Result<()> {
        let publisher_id = self.require_publisher().await?;

        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.client.get_status(&publisher_id).await;

        // The staleness check has to happen while holding the state lock:
        // checked unlocked, a newer load could start and commit between
        // the check and our write, and we would overwrite its fresh
        // status with this one.
        let mut state = self.state.write().await;
        if self.load_generation.load(Ordering::SeqCst) != generation {
            // A newer load superseded this one; its result owns the view.
            tracing::debug!(generation = generation, "Discarding stale status load");
            return Ok(());
        }

        state.loading = false;
        match result {
            Ok(status) => {
                state.status = Some(status);
                Ok(())
            }
            Err(e) => {
                state.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Navigate to wherever the loaded status says the user should go
    /// next: the recommended step, then the legacy field, then profile.
    pub async fn handle_continue(&self) {
        let target = {
            let state = self.state.read().await;
            state
                .status
                .as_ref()
                .map(|s| continue_target(s).to_string())
                .unwrap_or_else(|| DEFAULT_STEP.as_str().to_string())
        };
        self.router
            .navigate(resolve_route(&target, self.reload_on_done))
            .await;
    }

    /// Skip a step. The server is the authority on whether the skip is
    /// accepted; on success navigation follows `redirect_step`, falling
    /// back to the requested step — never `next_step`.
    pub async fn skip(&self, step: StepKey) -> Result<()> {
        let publisher_id = self.require_publisher().await?;
        let _guard = self.begin_submission()?;

        match self.client.skip_step(&publisher_id, step).await {
            Ok(advance) => {
                let target = advance
                    .redirect_step
                    .as_deref()
                    .unwrap_or(step.as_str())
                    .to_string();
                self.router
                    .navigate(resolve_route(&target, self.reload_on_done))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.record_api_error(&e).await;
                Err(e.into())
            }
        }
    }

    /// Submit the profile step (multipart). The response is a full status
    /// document; the view adopts it and navigation follows its
    /// recommendation.
    pub async fn complete_profile(&self, mut form: ProfileForm) -> Result<()> {
        let publisher_id = self.require_publisher().await?;
        let _guard = self.begin_submission()?;

        form.publisher_id = publisher_id;
        match self.client.complete_profile(form).await {
            Ok(status) => {
                let target = continue_target(&status).to_string();
                {
                    let mut state = self.state.write().await;
                    state.status = Some(status);
                    state.error = None;
                }
                self.router
                    .navigate(resolve_route(&target, self.reload_on_done))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.record_api_error(&e).await;
                Err(e.into())
            }
        }
    }

    /// Submit the revenue-split step.
    pub async fn complete_revenue_split(
        &self,
        writer_split: f64,
        publisher_split: f64,
    ) -> Result<()> {
        let publisher_id = self.require_publisher().await?;
        let _guard = self.begin_submission()?;

        let request = RevenueSplitRequest {
            publisher_id,
            writer_split,
            publisher_split,
        };
        let result = self.client.complete_revenue_split(&request).await;
        self.finish_step(StepKey::RevenueSplit, result).await
    }

    /// Submit the link-artist step.
    pub async fn complete_link_artist(&self) -> Result<()> {
        let publisher_id = self.require_publisher().await?;
        let _guard = self.begin_submission()?;

        let result = self.client.complete_link_artist(&publisher_id).await;
        self.finish_step(StepKey::LinkArtist, result).await
    }

    /// Submit the payment step.
    pub async fn complete_payment(&self, mut request: PaymentRequest) -> Result<()> {
        let publisher_id = self.require_publisher().await?;
        let _guard = self.begin_submission()?;

        request.publisher_id = publisher_id;
        let result = self.client.complete_payment(&request).await;
        self.finish_step(StepKey::Payment, result).await
    }

    /// Final completion call once every required step is done. Adopts the
    /// returned status and navigates per its recommendation (normally the
    /// dashboard).
    pub async fn finish(&self) -> Result<()> {
        let publisher_id = self.require_publisher().await?;
        let _guard = self.begin_submission()?;

        match self.client.complete_onboarding(&publisher_id).await {
            Ok(status) => {
                let target = continue_target(&status).to_string();
                {
                    let mut state = self.state.write().await;
                    state.status = Some(status);
                    state.error = None;
                }
                self.router
                    .navigate(resolve_route(&target, self.reload_on_done))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.record_api_error(&e).await;
                Err(e.into())
            }
        }
    }

    /// Shared tail of the per-step completion calls: navigate to the
    /// server's `next_step`, falling back to the linear successor, then
    /// `done`.
    async fn finish_step(
        &self,
        completed: StepKey,
        result: std::result::Result<StepAdvance, ApiError>,
    ) -> Result<()> {
        match result {
            Ok(advance) => {
                let target = advance.next_step.unwrap_or_else(|| {
                    completed
                        .next()
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| DONE_STEP.to_string())
                });
                self.router
                    .navigate(resolve_route(&target, self.reload_on_done))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.record_api_error(&e).await;
                Err(e.into())
            }
        }
    }

    /// Precondition check: every networked operation needs a publisher
    /// session. Missing id surfaces the sign-in-again message and never
    /// touches the network.
    async fn require_publisher(&self) -> Result<String> {
        match self.publisher_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => Ok(id.to_string()),
            None => {
                let err = SessionError::MissingPublisherId;
                let mut state = self.state.write().await;
                state.loading = false;
                state.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    fn begin_submission(&self) -> Result<SubmissionGuard<'_>> {
        if self
            .submission_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("Rejected overlapping submission");
            return Err(ControllerError::SubmissionInFlight.into());
        }
        Ok(SubmissionGuard(&self.submission_in_flight))
    }

    async fn record_api_error(&self, error: &ApiError) {
        // Prior status, if any, stays so partial UI can still render.
        self.state.write().await.error = Some(error.user_message());
    }
}
