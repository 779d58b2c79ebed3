use crate::capture::image_source::ImageSource;
use crate::library::logger::interface::Logger;
use crate::prediction::interface::{PredictionClient, PredictionError, PredictionResult};
use crate::prediction::response::parse_response;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::Duration;

pub const FILE_FIELD: &str = "file";

/// Posts the image as `multipart/form-data` to the classification endpoint.
pub struct PredictionClientHttp {
    client: Client,
    endpoint: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(
        endpoint: &str,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint, logger))
    }

    pub fn with_client(
        client: Client,
        endpoint: &str,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            logger: logger.with_namespace("prediction").with_namespace("http"),
        }
    }

    fn form(source: &ImageSource) -> Result<Form, PredictionError> {
        let part = Part::bytes(source.bytes.to_vec())
            .file_name(source.file_name.clone())
            .mime_str(&source.mime_type)
            .map_err(|e| {
                PredictionError::NetworkFailure(format!(
                    "invalid content type {}: {}",
                    source.mime_type, e
                ))
            })?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl PredictionClient for PredictionClientHttp {
    fn submit(&self, source: &ImageSource) -> Result<PredictionResult, PredictionError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            source.file_name,
            source.bytes.len()
        ));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(Self::form(source)?)
            .send()
            .map_err(|e| PredictionError::NetworkFailure(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| PredictionError::NetworkFailure(e.to_string()))?;

        let result = parse_response(status, &body);
        match &result {
            Ok(prediction) => {
                let _ = self.logger.info(&format!(
                    "{} -> {} ({:.2}%)",
                    status, prediction.label, prediction.confidence_percent
                ));
            }
            Err(e) => {
                let _ = self.logger.info(&format!("{} -> {}", status, e));
            }
        }
        result
    }
}
