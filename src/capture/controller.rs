use crate::capture::image_source::{ImageSource, ImageSourceError};
use crate::device_camera::interface::{DeviceCamera, DeviceCameraError, Resolution};
use crate::device_camera::session::CameraSession;
use crate::library::logger::interface::Logger;
use image::imageops::{self, FilterType};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Inactive,
    CameraActive(Resolution),
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(#[source] DeviceCameraError),

    #[error("camera is not active")]
    NotActive,

    #[error("could not read frame: {0}")]
    Frame(#[source] DeviceCameraError),

    #[error(transparent)]
    Encode(#[from] ImageSourceError),
}

/// Owns the single camera session and turns live frames into uploads.
pub struct CaptureController {
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    session: Option<CameraSession>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CaptureController {
    pub fn new(
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            camera,
            session: None,
            logger: logger.with_namespace("capture"),
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> CaptureState {
        match &self.session {
            Some(session) => CaptureState::CameraActive(session.resolution()),
            None => CaptureState::Inactive,
        }
    }

    pub fn open_camera(&mut self) -> Result<Resolution, CaptureError> {
        if let Some(session) = &self.session {
            return Ok(session.resolution());
        }

        let stream = self.camera.open().map_err(|e| {
            let _ = self.logger.info(&format!("Camera open failed: {}", e));
            CaptureError::CameraUnavailable(e)
        })?;
        let session = CameraSession::new(stream, self.logger.clone());
        let resolution = session.resolution();
        let _ = self
            .logger
            .info(&format!("Camera active at {}", resolution));
        self.session = Some(session);
        Ok(resolution)
    }

    /// Grabs one frame and releases the session, whether or not the read worked.
    pub fn capture_frame(&mut self) -> Result<ImageSource, CaptureError> {
        let mut session = self.session.take().ok_or(CaptureError::NotActive)?;
        let resolution = session.resolution();
        let mut frame = session.read_frame().map_err(CaptureError::Frame)?;
        drop(session);

        if frame.dimensions() != (resolution.width, resolution.height) {
            frame = imageops::resize(
                &frame,
                resolution.width,
                resolution.height,
                FilterType::Triangle,
            );
        }

        let source = ImageSource::from_frame(&frame)?;
        let _ = self.logger.info(&format!(
            "Captured {} ({} bytes)",
            resolution,
            source.bytes.len()
        ));
        Ok(source)
    }

    pub fn stop_camera(&mut self) {
        if self.session.take().is_some() {
            let _ = self.logger.info("Camera stopped");
        }
    }
}
