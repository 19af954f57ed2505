//! HTTP client for the remote scoring endpoint.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::ScoringConfig;
use crate::error::{ClientError, Result};
use crate::payload::{ScoreRequest, ScoreResult};
use wellness_model::WellnessInput;

/// User agent string for scoring requests.
const USER_AGENT_VALUE: &str = concat!("wellness-client/", env!("CARGO_PKG_VERSION"));

/// The seam between the submission orchestrator and the network.
///
/// Exactly one resolution per request, no cancellation, no retries; retry
/// policy, if any, belongs to the caller.
pub trait ScoreTransport {
    /// Submit a fully-validated record and resolve to the scored result or
    /// a transport failure.
    fn score(&self, input: &WellnessInput) -> impl Future<Output = Result<ScoreResult>>;
}

/// Client for the remote scoring endpoint.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ScoringClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScoreTransport for ScoringClient {
    async fn score(&self, input: &WellnessInput) -> Result<ScoreResult> {
        // Request bodies carry personal wellness data; log only the endpoint
        // and status, never the payload.
        tracing::debug!("Posting scoring request to {}", self.endpoint);

        let request = ScoreRequest::from(input);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!("Scoring endpoint answered HTTP {}", status.as_u16());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_score_response(&body)
    }
}

/// Extract the wellness index from a response body.
///
/// A body that is not JSON is a parse failure; a JSON body without a numeric
/// `mental_wellness_index` is a protocol violation.
fn parse_score_response(body: &str) -> Result<ScoreResult> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let mental_wellness_index = value
        .get("mental_wellness_index")
        .and_then(serde_json::Value::as_f64)
        .ok_or(ClientError::MissingIndex)?;
    Ok(ScoreResult {
        mental_wellness_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ScoringClient::new(&ScoringConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_is_taken_from_config() {
        let config = ScoringConfig::for_endpoint("http://localhost:8000/predict");
        let client = ScoringClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/predict");
    }

    #[test]
    fn test_parse_score_response() {
        let result = parse_score_response(r#"{"mental_wellness_index": 72.5}"#).unwrap();
        assert_eq!(result.mental_wellness_index, 72.5);
    }

    #[test]
    fn test_parse_rejects_non_json_body() {
        let err = parse_score_response("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::JsonParse(_)));
        assert!(err.is_protocol_violation());
    }

    #[test]
    fn test_parse_rejects_missing_index() {
        let err = parse_score_response(r#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, ClientError::MissingIndex));
    }

    #[test]
    fn test_parse_rejects_non_numeric_index() {
        let err = parse_score_response(r#"{"mental_wellness_index": "high"}"#).unwrap_err();
        assert!(matches!(err, ClientError::MissingIndex));
    }

    #[test]
    fn test_parse_accepts_extra_fields() {
        let result =
            parse_score_response(r#"{"mental_wellness_index": 41.0, "model_version": 3}"#).unwrap();
        assert_eq!(result.mental_wellness_index, 41.0);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        use wellness_model::{Gender, Occupation, WorkMode};

        // Discard port on loopback: nothing listens there.
        let config = ScoringConfig {
            endpoint: "http://127.0.0.1:9/predict".to_string(),
            timeout_secs: 5,
        };
        let client = ScoringClient::new(&config).unwrap();
        let input = WellnessInput {
            age: 30,
            gender: Gender::Male,
            occupation: Occupation::Employed,
            work_mode: WorkMode::Remote,
            screen_time_hours: 8.0,
            work_screen_hours: 6.0,
            leisure_screen_hours: 2.0,
            sleep_hours: 7.0,
            sleep_quality: 4,
            stress_level: 5,
            productivity: 70,
            exercise_minutes_per_week: 150.0,
            social_hours_per_week: 5.0,
        };
        let err = client.score(&input).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert!(!err.is_protocol_violation());
    }
}
