//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the publisher API, without a trailing slash.
    pub base_url: String,
    /// Bearer token for authenticated calls, if the deployment requires one.
    pub auth_token: Option<SecretString>,
    /// Request timeout applied to every call.
    pub timeout: Duration,
    /// Whether reaching the dashboard after `done` triggers a full reload.
    pub reload_on_done: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/publishers".to_string(),
            auth_token: None,
            timeout: Duration::from_secs(30),
            reload_on_done: true,
        }
    }
}

impl ClientConfig {
    /// Base URL with any trailing slash stripped, so endpoint joins are
    /// well-formed regardless of how the URL was configured.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_stripped() {
        let config = ClientConfig {
            base_url: "https://api.zamio.gh/api/publishers/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_base_url(),
            "https://api.zamio.gh/api/publishers"
        );
    }

    #[test]
    fn default_reloads_on_done() {
        assert!(ClientConfig::default().reload_on_done);
    }
}
