use crate::nutrient::nutrition_info::NutritionInfo;
use crate::prediction::interface::{PredictionError, PredictionResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ServiceFailure {
    error: String,
}

#[derive(Debug, Deserialize)]
struct ServiceSuccess {
    class_name: String,
    confidence: f64,
    nutrition_info: NutritionInfo,
}

// `error` is tried first so a payload carrying it is never read as a success.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServiceBody {
    Failure(ServiceFailure),
    Success(ServiceSuccess),
}

/// Maps an HTTP status and body onto the prediction contract.
pub fn parse_response(status: u16, body: &str) -> Result<PredictionResult, PredictionError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ServiceFailure>(body)
            .ok()
            .map(|failure| failure.error);
        return Err(PredictionError::UploadFailed { status, detail });
    }

    let parsed = serde_json::from_str::<ServiceBody>(body)
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;

    match parsed {
        ServiceBody::Failure(failure) => Err(PredictionError::ServiceError(failure.error)),
        ServiceBody::Success(success) => {
            if !success.confidence.is_finite() || !(0.0..=100.0).contains(&success.confidence) {
                return Err(PredictionError::MalformedResponse(format!(
                    "confidence {} outside 0..=100",
                    success.confidence
                )));
            }
            Ok(PredictionResult {
                label: success.class_name,
                confidence_percent: success.confidence,
                nutrients: success.nutrition_info,
            })
        }
    }
}
