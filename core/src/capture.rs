use tracing::debug;

use crate::capability::Capability;
use crate::model::{Photo, PhotoId, Size};

/// Collects a burst of photos from the capture source, in capture
/// order. Finishing hands the list to the selection pass as its
/// candidate queue.
pub struct CaptureSession {
    photos: Vec<Photo>,
    next_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// Missing camera permission blocks entering a capture session.
    #[error("camera access is required to capture photos")]
    CameraDenied,
    #[error("capture at least one photo before finishing")]
    NoPhotos,
}

impl CaptureSession {
    pub fn begin(camera: Capability) -> Result<CaptureSession, CaptureError> {
        if !camera.is_usable() {
            return Err(CaptureError::CameraDenied);
        }
        Ok(CaptureSession {
            photos: Vec::new(),
            next_id: 1,
        })
    }

    /// Store one captured frame.
    pub fn capture(&mut self, data: Vec<u8>, size: Size) -> PhotoId {
        let id = PhotoId(self.next_id);
        self.next_id += 1;
        self.photos.push(Photo { id, data, size });
        debug!(photo = %id, captured = self.photos.len(), "captured photo");
        id
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photos captured so far, for the preview strip.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// End the session, yielding the candidate photos for selection.
    pub fn finish(self) -> Result<Vec<Photo>, CaptureError> {
        if self.photos.is_empty() {
            return Err(CaptureError::NoPhotos);
        }
        Ok(self.photos)
    }
}
