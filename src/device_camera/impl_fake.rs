use crate::device_camera::interface::{CameraStream, DeviceCamera, DeviceCameraError, Resolution};
use crate::library::logger::interface::Logger;
use image::{Rgb, RgbImage};
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Synthetic camera producing gradient frames with a little sensor noise.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    resolution: Resolution,
    permission_granted: Arc<AtomicBool>,
    open_streams: Arc<AtomicUsize>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, resolution: Resolution) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            resolution,
            permission_granted: Arc::new(AtomicBool::new(true)),
            open_streams: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[allow(dead_code)]
    pub fn set_permission_granted(&self, granted: bool) {
        self.permission_granted.store(granted, Ordering::SeqCst);
    }

    /// Number of streams opened and not yet stopped.
    #[allow(dead_code)]
    pub fn open_streams(&self) -> usize {
        self.open_streams.load(Ordering::SeqCst)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn open(&self) -> Result<Box<dyn CameraStream>, DeviceCameraError> {
        if !self.permission_granted.load(Ordering::SeqCst) {
            let _ = self.logger.info("Permission denied");
            return Err(DeviceCameraError::PermissionDenied);
        }
        self.open_streams.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Stream opened at {}", self.resolution));
        Ok(Box::new(FakeStream {
            logger: self.logger.clone(),
            resolution: self.resolution,
            open_streams: self.open_streams.clone(),
            live: true,
        }))
    }
}

struct FakeStream {
    logger: Arc<dyn Logger + Send + Sync>,
    resolution: Resolution,
    open_streams: Arc<AtomicUsize>,
    live: bool,
}

impl CameraStream for FakeStream {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn read_frame(&mut self) -> Result<RgbImage, DeviceCameraError> {
        if !self.live {
            return Err(DeviceCameraError::Stream("stream already stopped".to_string()));
        }
        let Resolution { width, height } = self.resolution;
        let mut rng = rand::rng();
        let frame = RgbImage::from_fn(width, height, |x, y| {
            let noise: u8 = rng.random_range(0..16);
            Rgb([
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                96u8.saturating_add(noise),
            ])
        });
        Ok(frame)
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.open_streams.fetch_sub(1, Ordering::SeqCst);
            let _ = self.logger.info("Stream stopped");
        }
    }
}
