mod client;
pub mod digit;
pub mod iris;
pub mod sentiment;
pub mod survival;
mod types;

pub use client::HttpPredictionClient;
pub use digit::{DigitPrediction, DigitRequest};
pub use iris::{IrisPrediction, IrisRequest};
pub use sentiment::{Sentiment, SentimentPrediction, SentimentRequest};
pub use survival::{EmbarkPort, Sex, SurvivalOutcome, SurvivalPrediction, SurvivalRequest};
pub use types::Score;

use crate::Result;
use async_trait::async_trait;

/// The shared contract of the prediction adapter layer.
///
/// Each operation shapes its domain input into the wire payload the backend
/// expects, performs one HTTP POST, and normalizes the raw response into the
/// domain's typed result. Calls are independent round trips: no retries, no
/// caching, no batching, no cancellation.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict_digit(&self, request: DigitRequest) -> Result<DigitPrediction>;
    async fn predict_sentiment(&self, request: SentimentRequest) -> Result<SentimentPrediction>;
    async fn predict_survival(&self, request: SurvivalRequest) -> Result<SurvivalPrediction>;
    async fn predict_iris(&self, request: IrisRequest) -> Result<IrisPrediction>;
}
