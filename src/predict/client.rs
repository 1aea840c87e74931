use super::PredictionService;
use super::digit::{self, DigitPrediction, DigitRequest};
use super::iris::{self, IrisPrediction, IrisRequest};
use super::sentiment::{self, SentimentPrediction, SentimentRequest};
use super::survival::{self, SurvivalPrediction, SurvivalRequest};
use crate::config::{ApiConfig, ImageContract};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP adapter over the four inference backends.
///
/// Holds no state beyond the connection configuration; every call builds its
/// own payload and result from scratch, so concurrent calls do not interact.
pub struct HttpPredictionClient {
    client: reqwest::Client,
    base_url: String,
    image_contract: ImageContract,
}

impl HttpPredictionClient {
    pub fn new(config: ApiConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        debug!("Creating prediction client for: {}", base_url);

        Self {
            client: reqwest::Client::new(),
            base_url,
            image_contract: config.image_contract,
        }
    }

    /// One POST of a JSON body to a path under the shared base URL. A non-2xx
    /// status becomes a transport error carrying the code; an undecodable
    /// body becomes a decode error. Nothing is retried.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::decode(format!("invalid response body from {path}: {e}")))
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict_digit(&self, request: DigitRequest) -> Result<DigitPrediction> {
        let body = digit::shape(&request, self.image_contract)?;
        let raw: digit::WireResponse = self.post_json(digit::PATH, &body).await?;
        digit::normalize(raw)
    }

    async fn predict_sentiment(&self, request: SentimentRequest) -> Result<SentimentPrediction> {
        // The text goes over the wire unmodified; the backend owns all
        // tokenization and sequence encoding.
        let raw: sentiment::WireResponse = self.post_json(sentiment::PATH, &request).await?;
        sentiment::normalize(raw)
    }

    async fn predict_survival(&self, request: SurvivalRequest) -> Result<SurvivalPrediction> {
        let body = survival::shape(&request)?;
        let raw: survival::WireResponse = self.post_json(survival::PATH, &body).await?;
        survival::normalize(raw)
    }

    async fn predict_iris(&self, request: IrisRequest) -> Result<IrisPrediction> {
        let body = iris::shape(&request);
        let raw: iris::WireResponse = self.post_json(iris::PATH, &body).await?;
        iris::normalize(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            image_contract: ImageContract::default(),
        }
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = HttpPredictionClient::new(config("http://localhost:5000/"));

        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn keeps_base_url_path_segment() {
        let client = HttpPredictionClient::new(config("https://gateway.example.dev/api"));

        assert_eq!(client.base_url, "https://gateway.example.dev/api");
    }
}
