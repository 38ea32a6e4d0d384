use crate::model::{Album, Photo};

/// Horizontal swipe distance past which a slide flips.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Replays an album's photos with wrap-around navigation.
pub struct Slideshow {
    album: Album,
    index: usize,
}

impl Slideshow {
    pub fn new(album: Album) -> Slideshow {
        Slideshow { album, index: 0 }
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    /// Albums are non-empty by construction, there is always a current
    /// slide.
    pub fn current(&self) -> &Photo {
        &self.album.photos[self.index]
    }

    /// 1-based position counter, `(current, total)`.
    pub fn counter(&self) -> (usize, usize) {
        (self.index + 1, self.album.photos.len())
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.album.photos.len();
    }

    pub fn previous(&mut self) {
        let len = self.album.photos.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Interpret a finished horizontal swipe. Small movements are taps
    /// and flip nothing; swiping left advances, swiping right goes back.
    pub fn swipe(&mut self, delta_x: f32) {
        if delta_x < -SWIPE_THRESHOLD {
            self.next();
        } else if delta_x > SWIPE_THRESHOLD {
            self.previous();
        }
    }
}
