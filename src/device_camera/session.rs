use crate::device_camera::interface::{CameraStream, DeviceCameraError, Resolution};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use std::sync::Arc;

/// An open camera stream. The stream is stopped when the session is dropped.
pub struct CameraSession {
    stream: Box<dyn CameraStream>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CameraSession {
    pub fn new(stream: Box<dyn CameraStream>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self { stream, logger }
    }

    pub fn resolution(&self) -> Resolution {
        self.stream.resolution()
    }

    pub fn read_frame(&mut self) -> Result<RgbImage, DeviceCameraError> {
        self.stream.read_frame()
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stream.stop();
        let _ = self.logger.info("Camera session released");
    }
}
