use super::types::Score;
use crate::Result;
use serde::{Deserialize, Serialize};

pub(super) const PATH: &str = "/knn/predict";

const PLACEHOLDER_CONFIDENCE: f64 = 1.0;

/// One flower measurement set, in centimeters. Values are expected to be
/// positive but the backend owns that judgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrisRequest {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrisPrediction {
    /// Species name as the backend reports it, e.g. "setosa".
    pub species: String,
    /// Always a placeholder: the backend returns the bare species only.
    pub confidence: Score,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireRequest {
    features: [f64; 4],
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub(crate) prediction: String,
}

/// Encodes the measurements in the order the model was trained on:
/// [sepal length, sepal width, petal length, petal width].
pub fn shape_features(request: &IrisRequest) -> [f64; 4] {
    [
        request.sepal_length,
        request.sepal_width,
        request.petal_length,
        request.petal_width,
    ]
}

pub(crate) fn shape(request: &IrisRequest) -> WireRequest {
    WireRequest {
        features: shape_features(request),
    }
}

pub(crate) fn normalize(raw: WireResponse) -> Result<IrisPrediction> {
    Ok(IrisPrediction {
        species: raw.prediction,
        confidence: Score::Placeholder(PLACEHOLDER_CONFIDENCE),
    })
}
