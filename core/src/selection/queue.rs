use crate::gesture::Decision;
use crate::model::Photo;

/// Ordered photos awaiting a keep/reject decision, with a cursor on the
/// photo currently shown. Insertion order is capture order; the queue is
/// mutated only by removal (reject) or cursor advance (keep).
///
/// The cursor is always in `[0, len]`. Cursor == len with photos
/// remaining means the pass is complete and the remainder is the kept
/// set; an emptied queue means every photo was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQueue {
    photos: Vec<Photo>,
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Cursor on an undecided photo.
    Deciding,
    /// Every photo was rejected. Recoverable, not fatal.
    AllRejected,
    /// Cursor ran past the end with photos remaining.
    Complete,
}

impl CandidateQueue {
    pub fn new(photos: Vec<Photo>) -> CandidateQueue {
        CandidateQueue { photos, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Photo the cursor is on, `None` once the pass is over.
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.index)
    }

    pub fn state(&self) -> QueueState {
        if self.photos.is_empty() {
            QueueState::AllRejected
        } else if self.index >= self.photos.len() {
            QueueState::Complete
        } else {
            QueueState::Deciding
        }
    }

    /// Apply a committed decision to the current photo.
    ///
    /// Reject removes it; the cursor is clamped back onto the new last
    /// photo when the removal was at the end, and otherwise stays put so
    /// the photo that slid into this slot is shown next. Keep leaves the
    /// photo in place and advances the cursor.
    pub fn apply(&mut self, decision: Decision) -> QueueState {
        if self.state() != QueueState::Deciding {
            return self.state();
        }
        match decision {
            Decision::Reject => {
                self.photos.remove(self.index);
                if self.index >= self.photos.len() && !self.photos.is_empty() {
                    self.index = self.photos.len() - 1;
                }
            }
            Decision::Keep => self.index += 1,
        }
        self.state()
    }
}
