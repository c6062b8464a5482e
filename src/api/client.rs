use super::types::PredictionResponse;
use crate::{config::ApiConfig, error::ApiError, schema::PredictionRequest};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

pub const PREDICT_PATH: &str = "/api/predict";

#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Sends one prediction request. No retry, no caching.
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> std::result::Result<PredictionResponse, ApiError>;
}

pub struct HttpPredictionClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictionClient {
    pub fn new(config: &ApiConfig) -> Self {
        debug!("Creating prediction client for: {}", config.base_url);

        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> std::result::Result<PredictionResponse, ApiError> {
        let url = self.endpoint();
        debug!("Sending prediction request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body is treated the same as an unparseable one.
            let details = match response.bytes().await {
                Ok(body) => serde_json::from_slice::<Value>(&body).ok(),
                Err(e) => {
                    debug!("Failed to read error body: {}", e);
                    None
                }
            };
            let message = details
                .as_ref()
                .and_then(|d| d.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()));

            warn!("Prediction service returned {}: {}", status.as_u16(), message);
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
                details,
            });
        }

        let prediction: PredictionResponse = response.json().await.map_err(transport_error)?;

        debug!(
            "Received prediction {:?} at threshold {}",
            prediction.prediction, prediction.threshold
        );
        Ok(prediction)
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    warn!("Prediction request failed before a response was received: {}", error);
    ApiError::Transport {
        message: error.to_string(),
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_joins_fixed_path() {
        let client = HttpPredictionClient::new(&ApiConfig {
            base_url: "http://localhost:8000".to_string(),
        });
        assert_eq!(client.endpoint(), "http://localhost:8000/api/predict");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = HttpPredictionClient::new(&ApiConfig {
            base_url: "https://predict.example.org/".to_string(),
        });
        assert_eq!(client.endpoint(), "https://predict.example.org/api/predict");
    }
}
