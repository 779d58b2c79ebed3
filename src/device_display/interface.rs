use std::error::Error;

/// Presentation surface for the rendered view-model.
pub trait DeviceDisplay: Send + Sync {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replaces the whole screen with `lines`.
    fn write_lines(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;
}
