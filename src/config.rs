use chrono::{FixedOffset, Offset, Utc};
use std::path::PathBuf;
use std::time::Duration;

use crate::device_camera::interface::Resolution;
use crate::nutrient::projector::DEFAULT_TOP_COUNT;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout: Duration,
    pub top_nutrient_count: usize,
    pub logger_timezone: FixedOffset,
    pub fake_camera_resolution: Resolution,
    pub use_fake_service: bool,
    /// Replays this image as the live camera feed instead of synthetic frames.
    pub camera_still_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/predict".to_string(),
            request_timeout: Duration::from_secs(30),
            top_nutrient_count: DEFAULT_TOP_COUNT,
            logger_timezone: western_indonesia_time(),
            fake_camera_resolution: Resolution {
                width: 640,
                height: 480,
            },
            use_fake_service: false,
            camera_still_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup("NUTRI_LENS_ENDPOINT").filter(|s| !s.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(secs) = lookup("NUTRI_LENS_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()) {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(flag) = lookup("NUTRI_LENS_FAKE_SERVICE") {
            self.use_fake_service = matches!(flag.trim(), "1" | "true" | "yes");
        }
        if let Some(path) = lookup("NUTRI_LENS_CAMERA_STILL").filter(|s| !s.trim().is_empty()) {
            self.camera_still_path = Some(PathBuf::from(path.trim()));
        }
        self
    }
}

fn western_indonesia_time() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix())
}
