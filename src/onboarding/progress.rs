//! Progress computation and the terminal completion banners.

use super::status::OnboardingStatus;
use super::step::{step_state, StepKey, StepState};

/// Total number of onboarding steps.
pub const TOTAL_STEPS: usize = StepKey::ALL.len();

/// Number of steps whose completion flag is set.
pub fn completed_steps(status: &OnboardingStatus) -> usize {
    StepKey::ALL
        .iter()
        .filter(|key| step_state(status, **key) == StepState::Completed)
        .count()
}

/// Completion percentage recomputed from the four step flags.
pub fn progress_percentage(status: &OnboardingStatus) -> f64 {
    completed_steps(status) as f64 / TOTAL_STEPS as f64 * 100.0
}

/// The percentage to display.
///
/// The server's `profile_complete_percentage` is authoritative when it is
/// present and within 0–100; otherwise the ratio recomputed from the flags
/// is used. Displaying one value avoids the two numbers drifting apart on
/// screen.
pub fn effective_percentage(status: &OnboardingStatus) -> f64 {
    match status.profile_complete_percentage {
        Some(p) if (0.0..=100.0).contains(&p) => p,
        Some(p) => {
            tracing::warn!(
                server_percentage = p,
                "Server completion percentage out of range; recomputing from step flags"
            );
            progress_percentage(status)
        }
        None => progress_percentage(status),
    }
}

/// Terminal banner shown once every step is complete.
///
/// Evaluated only at 100% progress; below that neither banner renders.
/// Exactly one of the two applies, selected solely by
/// `admin_approval_required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBanner {
    /// All steps done, but an admin must approve the account before the
    /// publisher can proceed.
    PendingApproval,
    /// All steps done and no approval gate — setup is complete.
    SetupComplete,
}

impl CompletionBanner {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PendingApproval => {
                "All steps completed. Your account is awaiting admin approval."
            }
            Self::SetupComplete => "Setup complete. Welcome to ZamIO!",
        }
    }
}

/// Which completion banner to render, if any.
///
/// Keyed off the flag-derived progress rather than the server percentage so
/// a stale server value cannot strand a fully-completed publisher without
/// their terminal banner.
pub fn completion_banner(status: &OnboardingStatus) -> Option<CompletionBanner> {
    if completed_steps(status) < TOTAL_STEPS {
        return None;
    }
    if status.admin_approval_required {
        Some(CompletionBanner::PendingApproval)
    } else {
        Some(CompletionBanner::SetupComplete)
    }
}
