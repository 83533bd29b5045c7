//! Publisher onboarding core — step model, progress, navigation, and the
//! controller that ties them to the API.
//!
//! The flow is a fixed sequence of four steps (profile, revenue split,
//! link artists, payment). The server tracks completion per publisher and
//! recommends what to show next; this module derives everything the view
//! needs from that status document and decides where each action sends
//! the user.

pub mod controller;
pub mod navigate;
pub mod progress;
pub mod status;
pub mod step;

pub use controller::{OnboardingController, ViewState};
pub use navigate::{continue_target, resolve_route, Navigation, Router, DASHBOARD_PATH};
pub use progress::{
    completed_steps, completion_banner, effective_percentage, progress_percentage,
    CompletionBanner, TOTAL_STEPS,
};
pub use status::{OnboardingStatus, DONE_STEP};
pub use step::{definition, step_state, StepDefinition, StepKey, StepState, STEP_DEFINITIONS};
