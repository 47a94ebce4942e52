//! Prediction Client
//!
//! Performs the single form-encoded POST against the scoring endpoint and
//! turns the HTTP exchange into a `PredictionOutcome` or a typed error.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_PREDICT_DELAY_MS, ENDPOINT_ENV_VAR};
use crate::domain::{PredictionOutcome, PredictionRequest, PredictionResponse};
use crate::error::{Error, Result};

/// Connection settings for the scoring service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full URL of the predict endpoint
    pub endpoint: String,
    /// Cosmetic pause before sending, in milliseconds
    pub delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            delay_ms: DEFAULT_PREDICT_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Apply an endpoint override; empty values are ignored
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.map(|e| e.trim().to_string()) {
            if !endpoint.is_empty() {
                self.endpoint = endpoint;
            }
        }
        self
    }

    /// Apply the `SPI_ENDPOINT` environment override
    pub fn with_env_override(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok())
    }
}

/// Milliseconds for log fields, saturating instead of truncating
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// HTTP client for the scoring endpoint
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    /// Create a client, validating the endpoint URL
    pub fn new(config: ClientConfig) -> Result<Self> {
        reqwest::Url::parse(&config.endpoint).map_err(|e| Error::Invalid {
            message: format!("invalid endpoint {:?}: {e}", config.endpoint),
        })?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Request {
                message: e.to_string(),
            })?;

        Ok(Self { http, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Submit one request and classify the returned score
    ///
    /// Must run inside a tokio runtime (see `run_in_tokio`).
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionOutcome> {
        let submission_id = Uuid::now_v7();
        let endpoint = self.config.endpoint.as_str();

        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }

        debug!(%submission_id, endpoint, ?request, "Sending prediction request");
        let started = Instant::now();

        let response = self
            .http
            .post(endpoint)
            .form(&request.form_fields())
            .send()
            .await
            .map_err(|e| self.transport_error(submission_id, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(submission_id, e))?;
        let elapsed_ms = elapsed_millis(started.elapsed());

        if status != StatusCode::OK {
            warn!(%submission_id, status = status.as_u16(), elapsed_ms, "Prediction rejected by server");
            return Err(Error::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = PredictionResponse::parse(&body).inspect_err(|e| {
            warn!(%submission_id, error = %e, elapsed_ms, "Prediction response is malformed");
        })?;

        let outcome = PredictionOutcome::new(submission_id, parsed);
        info!(
            %submission_id,
            score = outcome.score,
            level = outcome.level.label(),
            elapsed_ms,
            "Prediction received"
        );

        Ok(outcome)
    }

    fn transport_error(&self, submission_id: Uuid, error: reqwest::Error) -> Error {
        if error.is_connect() {
            warn!(%submission_id, endpoint = %self.config.endpoint, error = %error, "Prediction server unreachable");
            Error::Unreachable {
                endpoint: self.config.endpoint.clone(),
            }
        } else {
            warn!(%submission_id, error = %error, "Prediction request failed");
            Error::Request {
                message: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:5000/predict_api");
        assert_eq!(config.delay_ms, 1200);
    }

    #[test]
    fn endpoint_override_ignores_blank_values() {
        let config = ClientConfig::default().with_endpoint_override(Some("  ".to_string()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        let config = ClientConfig::default()
            .with_endpoint_override(Some("http://10.0.0.5:8080/predict_api".to_string()));
        assert_eq!(config.endpoint, "http://10.0.0.5:8080/predict_api");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let config = ClientConfig {
            endpoint: "not a url".to_string(),
            delay_ms: 0,
        };
        let err = PredictionClient::new(config).expect_err("should reject");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn elapsed_millis_saturates() {
        assert_eq!(elapsed_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(elapsed_millis(Duration::from_micros(999)), 0);
        assert_eq!(elapsed_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig = toml::from_str("delay_ms = 0").expect("parse");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.delay_ms, 0);
    }
}
