use image::RgbImage;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Error)]
pub enum DeviceCameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera device found: {0}")]
    NoDevice(String),

    #[error("camera stream failed: {0}")]
    Stream(String),
}

/// A video source that can hand out one live stream at a time.
pub trait DeviceCamera {
    fn open(&self) -> Result<Box<dyn CameraStream>, DeviceCameraError>;
}

/// A live stream. Frames are read at the stream's native resolution.
pub trait CameraStream: Send {
    fn resolution(&self) -> Resolution;
    fn read_frame(&mut self) -> Result<RgbImage, DeviceCameraError>;
    /// Releases every underlying track. Must tolerate repeated calls.
    fn stop(&mut self);
}
