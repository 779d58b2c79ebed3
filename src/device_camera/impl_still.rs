use crate::device_camera::interface::{CameraStream, DeviceCamera, DeviceCameraError, Resolution};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;

/// Replays a still image as a live feed, e.g. for demos without a webcam.
pub struct DeviceCameraStill {
    logger: Arc<dyn Logger + Send + Sync>,
    path: PathBuf,
}

impl DeviceCameraStill {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, path: PathBuf) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("still"),
            path,
        }
    }
}

impl DeviceCamera for DeviceCameraStill {
    fn open(&self) -> Result<Box<dyn CameraStream>, DeviceCameraError> {
        let image = image::open(&self.path)
            .map_err(|e| DeviceCameraError::NoDevice(format!("{}: {}", self.path.display(), e)))?
            .to_rgb8();
        let _ = self.logger.info(&format!(
            "Replaying {} at {}x{}",
            self.path.display(),
            image.width(),
            image.height()
        ));
        Ok(Box::new(StillStream { frame: Some(image) }))
    }
}

struct StillStream {
    frame: Option<RgbImage>,
}

impl CameraStream for StillStream {
    fn resolution(&self) -> Resolution {
        match &self.frame {
            Some(frame) => Resolution {
                width: frame.width(),
                height: frame.height(),
            },
            None => Resolution {
                width: 0,
                height: 0,
            },
        }
    }

    fn read_frame(&mut self) -> Result<RgbImage, DeviceCameraError> {
        self.frame
            .clone()
            .ok_or_else(|| DeviceCameraError::Stream("stream already stopped".to_string()))
    }

    fn stop(&mut self) {
        self.frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_replays_file_at_its_own_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        RgbImage::new(32, 24).save(&path).unwrap();

        let camera = DeviceCameraStill::new(Arc::new(LoggerFake::new()), path);
        let mut stream = camera.open().unwrap();

        assert_eq!(
            stream.resolution(),
            Resolution {
                width: 32,
                height: 24
            }
        );
        assert_eq!(stream.read_frame().unwrap().dimensions(), (32, 24));

        stream.stop();
        assert!(stream.read_frame().is_err());
    }

    #[test]
    fn test_missing_file_is_no_device() {
        let camera = DeviceCameraStill::new(
            Arc::new(LoggerFake::new()),
            PathBuf::from("/definitely/not/here.png"),
        );
        assert!(matches!(camera.open(), Err(DeviceCameraError::NoDevice(_))));
    }
}
