use super::types::Score;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub(super) const PATH: &str = "/api/titanic/predict";

// Label vocabulary of the survival backend. The mapping is exact: an
// unrecognized label fails the call rather than guessing an outcome.
const LABEL_SURVIVED: &str = "생존";
const LABEL_DIED: &str = "사망";

// Placeholders for the probability the backend does not return.
const PLACEHOLDER_SURVIVED: f64 = 0.75;
const PLACEHOLDER_DIED: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbarkPort {
    #[serde(rename = "C")]
    Cherbourg,
    #[serde(rename = "Q")]
    Queenstown,
    #[serde(rename = "S")]
    Southampton,
}

/// One passenger profile submitted for survival prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalRequest {
    /// Embarkation port. The upstream form does not collect this, so it is
    /// optional with a documented Southampton default.
    #[serde(default)]
    pub embarked: Option<EmbarkPort>,
    /// Passenger class, 1 through 3.
    pub pclass: u8,
    pub sex: Sex,
    pub age: f64,
    /// Siblings and spouses aboard.
    pub sibsp: u32,
    /// Parents and children aboard.
    pub parch: u32,
    pub fare: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurvivalOutcome {
    Died,
    Survived,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalPrediction {
    pub outcome: SurvivalOutcome,
    /// Always a placeholder: the backend returns a label, never a
    /// probability, so this value is derived solely from the outcome.
    pub probability: Score,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireRequest {
    features: [f64; 8],
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub(crate) prediction: String,
}

/// Encodes a passenger profile into the 8-field vector the backend was
/// trained on: [pclass, sex, age, fare, embarked_Q, embarked_S, family_size,
/// is_alone]. The order is a contract with the backend and must not change.
pub fn shape_features(request: &SurvivalRequest) -> Result<[f64; 8]> {
    if !(1..=3).contains(&request.pclass) {
        return Err(Error::value(format!(
            "passenger class must be 1, 2 or 3, got {}",
            request.pclass
        )));
    }

    let sex_encoded = match request.sex {
        Sex::Female => 1.0,
        Sex::Male => 0.0,
    };

    // One-hot over (Q, S); Cherbourg is the implied all-zero baseline.
    let port = request.embarked.unwrap_or(EmbarkPort::Southampton);
    let embarked_q = if port == EmbarkPort::Queenstown { 1.0 } else { 0.0 };
    let embarked_s = if port == EmbarkPort::Southampton { 1.0 } else { 0.0 };

    let family_size = request.sibsp + request.parch + 1;
    let is_alone = if family_size == 1 { 1.0 } else { 0.0 };

    Ok([
        f64::from(request.pclass),
        sex_encoded,
        request.age,
        request.fare,
        embarked_q,
        embarked_s,
        f64::from(family_size),
        is_alone,
    ])
}

pub(crate) fn shape(request: &SurvivalRequest) -> Result<WireRequest> {
    Ok(WireRequest {
        features: shape_features(request)?,
    })
}

pub(crate) fn normalize(raw: WireResponse) -> Result<SurvivalPrediction> {
    let outcome = match raw.prediction.as_str() {
        LABEL_SURVIVED => SurvivalOutcome::Survived,
        LABEL_DIED => SurvivalOutcome::Died,
        other => {
            return Err(Error::value(format!(
                "unrecognized survival label from backend: {other:?}"
            )));
        }
    };

    let probability = match outcome {
        SurvivalOutcome::Survived => Score::Placeholder(PLACEHOLDER_SURVIVED),
        SurvivalOutcome::Died => Score::Placeholder(PLACEHOLDER_DIED),
    };

    Ok(SurvivalPrediction {
        outcome,
        probability,
    })
}
