use super::types::Score;
use crate::config::ImageContract;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(super) const PATH: &str = "/mnist/predict";

const PLACEHOLDER_CONFIDENCE: f64 = 1.0;

/// One digit-recognition attempt: the captured raster, string-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitRequest {
    pub image_base64: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitPrediction {
    /// Predicted class, 0 through 9.
    pub digit: u8,
    /// Always a placeholder: the backend returns the bare class only.
    pub confidence: Score,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub(crate) prediction: i64,
}

/// Builds the request body under the field name the configured backend
/// contract declares. No feature engineering beyond the encoding itself.
pub(crate) fn shape(request: &DigitRequest, contract: ImageContract) -> Result<Value> {
    if request.image_base64.is_empty() {
        return Err(Error::value("image payload must not be empty"));
    }

    let mut body = serde_json::Map::new();
    body.insert(
        contract.field_name().to_string(),
        Value::String(request.image_base64.clone()),
    );
    Ok(Value::Object(body))
}

pub(crate) fn normalize(raw: WireResponse) -> Result<DigitPrediction> {
    let digit = u8::try_from(raw.prediction)
        .ok()
        .filter(|d| *d <= 9)
        .ok_or_else(|| {
            Error::value(format!(
                "digit backend predicted {} outside 0..=9",
                raw.prediction
            ))
        })?;

    Ok(DigitPrediction {
        digit,
        confidence: Score::Placeholder(PLACEHOLDER_CONFIDENCE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn shapes_under_current_contract_field() {
        let body = shape(
            &DigitRequest {
                image_base64: "iVBORw0KGgo=".to_string(),
            },
            ImageContract::Base64V2,
        )
        .unwrap();

        assert_eq!(body, json!({ "image_base64": "iVBORw0KGgo=" }));
    }

    #[test]
    fn shapes_under_legacy_contract_field() {
        let body = shape(
            &DigitRequest {
                image_base64: "iVBORw0KGgo=".to_string(),
            },
            ImageContract::PixelsV1,
        )
        .unwrap();

        assert_eq!(body, json!({ "image_pixels": "iVBORw0KGgo=" }));
    }

    #[test]
    fn rejects_empty_payload() {
        let result = shape(
            &DigitRequest {
                image_base64: String::new(),
            },
            ImageContract::Base64V2,
        );

        assert!(matches!(result, Err(crate::Error::Value(_))));
    }

    #[test]
    fn normalizes_with_placeholder_confidence() {
        let prediction = normalize(WireResponse { prediction: 7 }).unwrap();

        assert_eq!(prediction.digit, 7);
        assert_eq!(prediction.confidence, Score::Placeholder(1.0));
    }

    #[test]
    fn rejects_out_of_range_class() {
        assert!(matches!(
            normalize(WireResponse { prediction: 10 }),
            Err(crate::Error::Value(_))
        ));
        assert!(matches!(
            normalize(WireResponse { prediction: -1 }),
            Err(crate::Error::Value(_))
        ));
    }
}
