use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};

/// Keeps every rendered screen for inspection.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    screens: Arc<Mutex<Vec<Vec<String>>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_screen(&self) -> Option<Vec<String>> {
        self.screens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.screens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(lines.to_vec());
        Ok(())
    }
}
