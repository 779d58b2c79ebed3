use crate::capture::image_source::ImageSource;
use crate::library::logger::interface::Logger;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreviewId(pub u64);

/// What the presentation layer shows as the selected image.
#[derive(Clone, PartialEq)]
pub enum PreviewUri {
    /// Handle into the [`PreviewStore`], used for picked and dropped files.
    ObjectUrl(PreviewId),
    /// Inline `data:` URI, used for camera captures.
    DataUri(String),
}

impl std::fmt::Display for PreviewUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewUri::ObjectUrl(PreviewId(id)) => write!(f, "preview://{}", id),
            PreviewUri::DataUri(uri) => {
                let header = uri.split(',').next().unwrap_or_default();
                write!(f, "{},<{} chars>", header, uri.len())
            }
        }
    }
}

impl std::fmt::Debug for PreviewUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PreviewUri({})", self)
    }
}

/// Holds the image behind each live object URL until it is revoked.
pub struct PreviewStore {
    previews: HashMap<PreviewId, ImageSource>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PreviewStore {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            previews: HashMap::new(),
            logger: logger.with_namespace("preview"),
        }
    }

    pub fn register(&mut self, id: PreviewId, source: ImageSource) {
        let _ = self.logger.info(&format!(
            "Registered preview://{} ({} bytes)",
            id.0,
            source.bytes.len()
        ));
        self.previews.insert(id, source);
    }

    /// Revoking an unknown or already revoked handle is a no-op.
    pub fn revoke(&mut self, id: PreviewId) {
        if self.previews.remove(&id).is_some() {
            let _ = self.logger.info(&format!("Revoked preview://{}", id.0));
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, id: PreviewId) -> Option<&ImageSource> {
        self.previews.get(&id)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn clear(&mut self) {
        let ids: Vec<PreviewId> = self.previews.keys().copied().collect();
        for id in ids {
            self.revoke(id);
        }
    }
}
