use serde::{Deserialize, Serialize};

use super::PhotoId;

/// A captured image. The payload is opaque to the engine, only the
/// dimensions matter for presentation. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Photo {
    pub id: PhotoId,
    pub data: Vec<u8>,
    pub size: Size,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
