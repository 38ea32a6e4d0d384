use tracing::debug;

use crate::gesture::{GestureConfig, GestureEngine, GestureEvent, GestureSession, ViewState};
use crate::model::Photo;

use super::queue::{CandidateQueue, QueueState};

/// Drives one decision pass over a finished capture session: owns the
/// candidate queue, the gesture engine, and the per-photo session.
/// Events are handled one at a time; a commit mutates the queue and
/// resets the session before the next event is processed.
pub struct SelectionPass {
    queue: CandidateQueue,
    engine: GestureEngine,
    session: GestureSession,
}

/// What the presentation surface needs after each event.
#[derive(Debug, Clone, PartialEq)]
pub struct PassUpdate {
    pub view: ViewState,
    /// Set when this event ended the pass.
    pub outcome: Option<PassOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// The remaining photos, in original relative order, ready for
    /// album creation.
    Complete(Vec<Photo>),
    /// Every photo was rejected; surface it and return to capture entry.
    AllRejected,
}

impl SelectionPass {
    pub fn new(photos: Vec<Photo>, config: GestureConfig) -> SelectionPass {
        let mut engine = GestureEngine::new(config);
        let mut session = GestureSession::default();
        engine.reset(&mut session);
        SelectionPass {
            queue: CandidateQueue::new(photos),
            engine,
            session,
        }
    }

    /// Photo currently shown.
    pub fn current_photo(&self) -> Option<&Photo> {
        self.queue.current()
    }

    /// 1-based progress counter, `(current, total)`.
    pub fn counter(&self) -> (usize, usize) {
        (self.queue.index() + 1, self.queue.len())
    }

    pub fn handle_event(&mut self, event: GestureEvent) -> PassUpdate {
        let update = self.engine.handle(&mut self.session, event);
        let Some(decision) = update.decision else {
            return PassUpdate {
                view: update.view,
                outcome: None,
            };
        };
        let state = self.queue.apply(decision);
        // clear transform and indicators before the next photo is shown
        self.engine.begin_photo(&mut self.session);
        debug!(
            ?decision,
            index = self.queue.index(),
            remaining = self.queue.len(),
            "decision applied"
        );
        let outcome = match state {
            QueueState::Deciding => None,
            QueueState::AllRejected => Some(PassOutcome::AllRejected),
            QueueState::Complete => Some(PassOutcome::Complete(self.queue.photos().to_vec())),
        };
        PassUpdate {
            view: update.view,
            outcome,
        }
    }
}
