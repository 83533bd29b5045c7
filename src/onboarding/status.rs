//! The server-sourced onboarding status document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::step::StepKey;

/// Wire value of `next_recommended_step` when onboarding is finished.
pub const DONE_STEP: &str = "done";

/// A publisher's onboarding status as reported by the API.
///
/// Exactly one of these exists per publisher; it is fetched fresh on each
/// view and never cached across navigations. The shape tolerates both
/// historical API versions at once: newer servers send
/// `next_recommended_step`, older ones only `onboarding_step`. Every field
/// defaults so either shape (and partial documents) deserialize cleanly;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingStatus {
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub revenue_split_completed: bool,
    #[serde(default)]
    pub link_artist_completed: bool,
    #[serde(default)]
    pub payment_info_added: bool,
    /// KYC verification state, e.g. "pending", "verified". Opaque to the
    /// client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<String>,
    /// Server-computed completion percentage (0–100). May diverge from the
    /// ratio recomputed from the four flags; see `progress`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_complete_percentage: Option<f64>,
    /// Server-recommended next step: a step key in wire form, or `"done"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_recommended_step: Option<String>,
    /// Legacy field from the older API shape. Consulted only when
    /// `next_recommended_step` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_step: Option<String>,
    /// Whether final activation waits on a manual admin review after all
    /// required steps are complete.
    #[serde(default)]
    pub admin_approval_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl OnboardingStatus {
    /// The completion flag backing one step.
    pub fn step_flag(&self, key: StepKey) -> bool {
        match key {
            StepKey::Profile => self.profile_completed,
            StepKey::RevenueSplit => self.revenue_split_completed,
            StepKey::LinkArtist => self.link_artist_completed,
            StepKey::Payment => self.payment_info_added,
        }
    }

    /// Whether the server considers onboarding finished.
    pub fn is_done(&self) -> bool {
        self.next_recommended_step.as_deref() == Some(DONE_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_current_api_shape() {
        let json = serde_json::json!({
            "profile_completed": true,
            "revenue_split_completed": true,
            "link_artist_completed": false,
            "payment_info_added": false,
            "kyc_status": "pending",
            "profile_complete_percentage": 50.0,
            "next_recommended_step": "link-artist",
            "admin_approval_required": true,
            "approved_at": "2026-08-01T09:30:00Z",
            "self_published_artists": 3
        });
        let status: OnboardingStatus = serde_json::from_value(json).unwrap();
        assert!(status.profile_completed);
        assert!(!status.payment_info_added);
        assert_eq!(status.kyc_status.as_deref(), Some("pending"));
        assert_eq!(status.profile_complete_percentage, Some(50.0));
        assert_eq!(status.next_recommended_step.as_deref(), Some("link-artist"));
        assert!(status.onboarding_step.is_none());
        assert!(status.admin_approval_required);
        assert_eq!(
            status.approved_at.unwrap(),
            chrono::DateTime::parse_from_rfc3339("2026-08-01T09:30:00Z").unwrap()
        );
    }

    #[test]
    fn deserializes_legacy_api_shape() {
        // Older servers only send onboarding_step and the flags.
        let json = serde_json::json!({
            "profile_completed": true,
            "onboarding_step": "revenue-split"
        });
        let status: OnboardingStatus = serde_json::from_value(json).unwrap();
        assert!(status.profile_completed);
        assert!(!status.revenue_split_completed);
        assert!(status.next_recommended_step.is_none());
        assert_eq!(status.onboarding_step.as_deref(), Some("revenue-split"));
    }

    #[test]
    fn empty_document_defaults() {
        let status: OnboardingStatus = serde_json::from_value(serde_json::json!({})).unwrap();
        for key in StepKey::ALL {
            assert!(!status.step_flag(key));
        }
        assert!(!status.is_done());
        assert!(!status.admin_approval_required);
    }

    #[test]
    fn done_marker() {
        let status = OnboardingStatus {
            next_recommended_step: Some("done".to_string()),
            ..Default::default()
        };
        assert!(status.is_done());

        let status = OnboardingStatus {
            next_recommended_step: Some("payment".to_string()),
            ..Default::default()
        };
        assert!(!status.is_done());
    }
}
