use std::future::Future;
use std::time::Duration;

use reqwest::{header, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::presenter::PredictionResult;

pub const DEFAULT_ENDPOINT: &str = "https://breastcancerclassification.onrender.com/predict";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Network error: could not reach prediction service")]
    Network(#[source] reqwest::Error),
    #[error("Network error: prediction service did not respond in time")]
    Timeout(#[source] reqwest::Error),
    #[error("Invalid response from prediction service")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("{message}")]
    Service { status: u16, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err)
        } else {
            ClientError::Network(err)
        }
    }
}

/// Connection settings for the prediction service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Health check URL; derived from `endpoint` when unset
    pub health_url: Option<String>,
    /// No timeout when unset
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            health_url: None,
            timeout: None,
            user_agent: concat!("prognosis/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Service status reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_status: String,
    pub feature_count: usize,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a FeatureVector,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Something that can classify a feature vector.
pub trait Predictor {
    fn predict(
        &self,
        features: &FeatureVector,
    ) -> impl Future<Output = Result<PredictionResult, ClientError>> + Send;
}

/// HTTP client for the prediction service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: Url,
    health_url: Url,
}

fn parse_url(url: &str) -> Result<Url, ClientError> {
    Url::parse(url).map_err(|e| ClientError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = parse_url(&config.endpoint)?;
        let health_url = match &config.health_url {
            Some(url) => parse_url(url)?,
            None => endpoint.join("health").map_err(|e| ClientError::InvalidUrl {
                url: config.endpoint.clone(),
                reason: e.to_string(),
            })?,
        };

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        log::info!("Prediction endpoint: {}", endpoint);
        Ok(Self {
            http,
            endpoint,
            health_url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    /// Sends one prediction request. Never retries.
    pub async fn request_prediction(&self, features: &FeatureVector) -> Result<PredictionResult, ClientError> {
        let body = serde_json::to_vec(&PredictRequest { features })?;
        log::debug!("POST {} with {} features", self.endpoint, features.len());

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        log::info!("Prediction response status: {}", status);

        if !status.is_success() {
            return Err(service_error(status, &bytes));
        }

        let result: PredictionResult = serde_json::from_slice(&bytes)?;
        log::debug!("Prediction result: {:?}", result);
        Ok(result)
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        log::debug!("GET {}", self.health_url);
        let response = self.http.get(self.health_url.clone()).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(service_error(status, &bytes));
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Predictor for PredictionClient {
    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, ClientError> {
        self.request_prediction(features).await
    }
}

fn service_error(status: StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));
    ClientError::Service {
        status: status.as_u16(),
        message,
    }
}
