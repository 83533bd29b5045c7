//! Onboarding steps — the fixed sequence a publisher works through.

use serde::{Deserialize, Serialize};

use super::status::OnboardingStatus;

/// The four publisher onboarding steps.
///
/// Ordered linearly: Profile → RevenueSplit → LinkArtist → Payment. The
/// ordering is presentational; the server decides what actually comes next
/// via `next_recommended_step`, and nothing client-side prevents jumping
/// around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKey {
    Profile,
    RevenueSplit,
    LinkArtist,
    Payment,
}

impl StepKey {
    /// All steps in presentation order.
    pub const ALL: [StepKey; 4] = [
        StepKey::Profile,
        StepKey::RevenueSplit,
        StepKey::LinkArtist,
        StepKey::Payment,
    ];

    /// Wire form of the key, as the API sends and expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::RevenueSplit => "revenue-split",
            Self::LinkArtist => "link-artist",
            Self::Payment => "payment",
        }
    }

    /// Parse a wire-form key. Returns `None` for anything unrecognized,
    /// including `"done"` — callers decide what the fallback means.
    pub fn parse(s: &str) -> Option<StepKey> {
        match s {
            "profile" => Some(Self::Profile),
            "revenue-split" => Some(Self::RevenueSplit),
            "link-artist" => Some(Self::LinkArtist),
            "payment" => Some(Self::Payment),
            _ => None,
        }
    }

    /// The next step in presentation order, if any.
    pub fn next(&self) -> Option<StepKey> {
        match self {
            Self::Profile => Some(Self::RevenueSplit),
            Self::RevenueSplit => Some(Self::LinkArtist),
            Self::LinkArtist => Some(Self::Payment),
            Self::Payment => None,
        }
    }
}

impl std::fmt::Display for StepKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static metadata for one onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub key: StepKey,
    pub title: &'static str,
    pub description: &'static str,
    /// Required steps cannot be skipped. Advisory on the client — the
    /// badge rendering uses it, but the server is the authority on
    /// whether a skip is accepted.
    pub required: bool,
}

/// The fixed, ordered step definitions.
pub const STEP_DEFINITIONS: [StepDefinition; 4] = [
    StepDefinition {
        key: StepKey::Profile,
        title: "Company Profile",
        description: "Tell us about your publishing company and where you operate.",
        required: true,
    },
    StepDefinition {
        key: StepKey::RevenueSplit,
        title: "Revenue Split",
        description: "Set the default writer/publisher split applied to new agreements.",
        required: true,
    },
    StepDefinition {
        key: StepKey::LinkArtist,
        title: "Link Artists",
        description: "Connect the artists whose royalties you administer.",
        required: false,
    },
    StepDefinition {
        key: StepKey::Payment,
        title: "Payment Details",
        description: "Add a mobile money or bank account for royalty payouts.",
        required: false,
    },
];

/// Look up the definition for a step.
pub fn definition(key: StepKey) -> &'static StepDefinition {
    // ALL and STEP_DEFINITIONS share the same fixed order.
    &STEP_DEFINITIONS[key as usize]
}

/// Derived per-step state. Purely a function of the status flags — the
/// status document never yields a third value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Pending,
}

impl StepState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Icon name the embedding UI renders for this state.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Completed => "check-circle",
            Self::Pending => "circle",
        }
    }

    /// Badge styling class for this state.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Completed => "badge-success",
            Self::Pending => "badge-muted",
        }
    }
}

/// Map a status document to the state of one step.
pub fn step_state(status: &OnboardingStatus, key: StepKey) -> StepState {
    if status.step_flag(key) {
        StepState::Completed
    } else {
        StepState::Pending
    }
}
