use crate::capture::image_source::ImageSource;
use crate::nutrient::nutrition_info::NutritionInfo;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: String,
    pub confidence_percent: f64,
    pub nutrients: NutritionInfo,
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("upload failed with status {status}")]
    UploadFailed { status: u16, detail: Option<String> },

    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("service error: {0}")]
    ServiceError(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Sends one image to the classification service. No retries.
pub trait PredictionClient {
    fn submit(&self, source: &ImageSource) -> Result<PredictionResult, PredictionError>;
}
