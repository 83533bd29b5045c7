//! Navigation resolution — mapping step targets to routes.

use async_trait::async_trait;

use super::status::OnboardingStatus;
use super::step::StepKey;

/// Route shown when onboarding is finished (or the target is unrecognized).
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Default target when the status carries no step hint at all.
pub const DEFAULT_STEP: StepKey = StepKey::Profile;

/// A resolved page transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    /// Whether the router should force a full page reload after moving.
    /// Only ever set for the dashboard route.
    pub reload: bool,
}

/// Performs the actual page transition. Implemented by the embedding shell
/// (SPA router, CLI printer, test recorder).
#[async_trait]
pub trait Router: Send + Sync {
    async fn navigate(&self, nav: Navigation);
}

/// Resolve a step target to a concrete route.
///
/// Total over arbitrary input: the four step keys map to their onboarding
/// pages, and everything else — `"done"`, typos, the empty string — maps
/// to the dashboard. The permissive fallback is deliberate; the server's
/// hint must never be able to strand the user on an error page.
pub fn resolve_route(target: &str, reload_on_done: bool) -> Navigation {
    match StepKey::parse(target) {
        Some(step) => Navigation {
            path: format!("/onboarding/{step}"),
            reload: false,
        },
        None => {
            if target != super::status::DONE_STEP {
                tracing::warn!(step = %target, "Unrecognized step target; routing to dashboard");
            }
            Navigation {
                path: DASHBOARD_PATH.to_string(),
                reload: reload_on_done,
            }
        }
    }
}

/// The target `Continue` should resolve.
///
/// Precedence: `next_recommended_step`, then the legacy `onboarding_step`,
/// then `"profile"`. Both fields are consulted because the client has to
/// tolerate two historical API shapes at once; the order must not change.
pub fn continue_target(status: &OnboardingStatus) -> &str {
    status
        .next_recommended_step
        .as_deref()
        .or(status.onboarding_step.as_deref())
        .unwrap_or(DEFAULT_STEP.as_str())
}
