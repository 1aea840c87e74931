use super::types::Score;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub(super) const PATH: &str = "/lstm/predict";

const POSITIVE_THRESHOLD: f64 = 0.5;

/// One text submitted for sentiment scoring. The text may be empty; all
/// tokenization and sequence encoding happens on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub review: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPrediction {
    pub sentiment: Sentiment,
    /// The one genuinely model-derived score in the system.
    pub probability: Score,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub(crate) probability: RawProbability,
}

/// The backend has been observed returning the probability as a string; it is
/// unresolved whether it can also be numeric. Both encodings are accepted,
/// anything else fails the call.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawProbability {
    Number(f64),
    Text(String),
}

pub(crate) fn normalize(raw: WireResponse) -> Result<SentimentPrediction> {
    let probability = match raw.probability {
        RawProbability::Number(p) => p,
        RawProbability::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            Error::value(format!("sentiment probability is not numeric: {s:?}"))
        })?,
    };

    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(Error::value(format!(
            "sentiment probability {probability} outside [0, 1]"
        )));
    }

    let sentiment = if probability >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    };

    Ok(SentimentPrediction {
        sentiment,
        probability: Score::Model(probability),
    })
}
