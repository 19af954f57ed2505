//! Configuration for the scoring transport.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Production scoring endpoint, from the deployed service.
pub const DEFAULT_ENDPOINT: &str =
    "https://mental-wellness-prediction-using-artificial-neur-production.up.railway.app/predict";

/// Default bound on one request; a request past this is treated as failed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the scoring endpoint.
///
/// The endpoint is external configuration, injected into the client rather
/// than baked into the request pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Full URL of the scoring endpoint.
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    REQUEST_TIMEOUT.as_secs()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ScoringConfig {
    /// Config for a custom endpoint with the default timeout.
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), REQUEST_TIMEOUT);
    }

    #[test]
    fn test_timeout_defaults_when_absent_from_json() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"endpoint":"http://localhost:8000/predict"}"#).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8000/predict");
        assert_eq!(config.timeout_secs, 30);
    }
}
