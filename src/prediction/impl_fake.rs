use crate::capture::image_source::ImageSource;
use crate::library::logger::interface::Logger;
use crate::nutrient::nutrition_info::{NutrientEntry, NutritionInfo};
use crate::prediction::interface::{PredictionClient, PredictionError, PredictionResult};
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum FakeResponse {
    Random,
    Prediction(PredictionResult),
    ServiceError(String),
    UploadFailed(u16),
}

/// Offline stand-in for the classification service.
pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    response: FakeResponse,
    submissions: Arc<AtomicUsize>,
}

const VEGETABLES: [&str; 10] = [
    "Bawang Merah",
    "Bawang Putih",
    "Bayam",
    "Cabai",
    "Kentang",
    "Kubis",
    "Terong",
    "Timun",
    "Tomat",
    "Wortel",
];

const NUTRIENT_KEYS: [&str; 6] = [
    "energi",
    "protein",
    "lemak_total",
    "karbohidrat_total",
    "vitamin_c",
    "serat_pangan",
];

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_response(logger, FakeResponse::Random)
    }

    pub fn with_response(logger: Arc<dyn Logger + Send + Sync>, response: FakeResponse) -> Self {
        Self {
            logger: logger.with_namespace("prediction").with_namespace("fake"),
            response,
            submissions: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[allow(dead_code)]
    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    fn random_prediction() -> Result<PredictionResult, PredictionError> {
        let mut rng = rand::rng();
        let invalid = |e: rand::distr::uniform::Error| {
            PredictionError::MalformedResponse(format!("fake distribution: {}", e))
        };
        let index_dist = Uniform::new(0, VEGETABLES.len()).map_err(invalid)?;
        let confidence_dist = Uniform::new(50.0f64, 100.0).map_err(invalid)?;
        let amount_dist = Uniform::new(0.0f64, 50.0).map_err(invalid)?;
        let akg_dist = Uniform::new(0.0f64, 40.0).map_err(invalid)?;

        let nutrients: NutritionInfo = NUTRIENT_KEYS
            .iter()
            .map(|&key| {
                let entry = NutrientEntry {
                    amount: (amount_dist.sample(&mut rng) * 10.0f64).round() / 10.0,
                    akg_percent: akg_dist.sample(&mut rng).round(),
                };
                (key, entry)
            })
            .collect();

        Ok(PredictionResult {
            label: VEGETABLES[index_dist.sample(&mut rng)].to_string(),
            confidence_percent: confidence_dist.sample(&mut rng),
            nutrients,
        })
    }
}

impl PredictionClient for PredictionClientFake {
    fn submit(&self, source: &ImageSource) -> Result<PredictionResult, PredictionError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Classifying {} with fake service...", source.file_name));

        match &self.response {
            FakeResponse::Random => Self::random_prediction(),
            FakeResponse::Prediction(prediction) => Ok(prediction.clone()),
            FakeResponse::ServiceError(message) => {
                Err(PredictionError::ServiceError(message.clone()))
            }
            FakeResponse::UploadFailed(status) => Err(PredictionError::UploadFailed {
                status: *status,
                detail: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::image_source::ImageOrigin;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_random_prediction_is_well_formed() {
        let client = PredictionClientFake::new(Arc::new(LoggerFake::new()));
        let source = ImageSource {
            file_name: "x.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3].into(),
            origin: ImageOrigin::Picked,
        };

        let result = client.submit(&source).unwrap();

        assert!(VEGETABLES.contains(&result.label.as_str()));
        assert!((0.0..=100.0).contains(&result.confidence_percent));
        assert_eq!(result.nutrients.len(), NUTRIENT_KEYS.len());
        assert_eq!(client.submissions(), 1);
    }
}
