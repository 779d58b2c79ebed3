use crate::device_camera::interface::Resolution;
use base64::Engine;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

pub const CAPTURED_FILE_NAME: &str = "captured-image.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    Picked,
    Dropped,
    Camera(Resolution),
}

/// An image payload ready for upload, whatever it came from.
#[derive(Clone, PartialEq)]
pub struct ImageSource {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
    pub origin: ImageOrigin,
}

#[derive(Debug, Error)]
pub enum ImageSourceError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not an image")]
    NotAnImage(PathBuf),

    #[error("could not encode frame: {0}")]
    Encode(#[from] image::ImageError),
}

impl ImageSource {
    /// Reads a picked or dropped file. Only the content sniff decides whether
    /// it is an image, the extension is just a hint.
    pub fn from_path(path: &Path, origin: ImageOrigin) -> Result<Self, ImageSourceError> {
        let bytes = std::fs::read(path).map_err(|source| ImageSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = image::guess_format(&bytes)
            .or_else(|_| ImageFormat::from_path(path))
            .map_err(|_| ImageSourceError::NotAnImage(path.to_path_buf()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            file_name,
            mime_type: format.to_mime_type().to_string(),
            bytes: bytes.into(),
            origin,
        })
    }

    pub fn from_frame(frame: &RgbImage) -> Result<Self, ImageSourceError> {
        let mut buffer = Cursor::new(Vec::new());
        frame.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(Self {
            file_name: CAPTURED_FILE_NAME.to_string(),
            mime_type: ImageFormat::Png.to_mime_type().to_string(),
            bytes: buffer.into_inner().into(),
            origin: ImageOrigin::Camera(Resolution {
                width: frame.width(),
                height: frame.height(),
            }),
        })
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSource")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .field("origin", &self.origin)
            .finish()
    }
}
