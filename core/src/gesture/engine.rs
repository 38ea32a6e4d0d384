use tracing::debug;

use super::tilt::{TiltOutcome, TiltTracker};
use super::TiltConfig;

/// Terminal outcome for one photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Keep,
    Reject,
}

impl Decision {
    /// Sign convention shared by every input: negative = reject (left),
    /// positive = keep (right).
    pub(crate) fn from_signal(x: f32) -> Decision {
        if x < 0.0 {
            Decision::Reject
        } else {
            Decision::Keep
        }
    }

    fn sign(self) -> f32 {
        match self {
            Decision::Keep => 1.0,
            Decision::Reject => -1.0,
        }
    }
}

/// Thresholds are magnitudes in screen units, determined empirically.
/// Tuning happens in configuration, the decision logic never hardcodes
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Drag magnitude at which indicator highlighting starts.
    pub preview_threshold: f32,
    /// Drag magnitude past which a release commits a decision.
    pub commit_threshold: f32,
    /// Degrees of card rotation per unit of horizontal drag.
    pub rotation_per_unit: f32,
    pub tilt: TiltConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            preview_threshold: 50.0,
            commit_threshold: 100.0,
            rotation_per_unit: 0.1,
            tilt: TiltConfig::default(),
        }
    }
}

/// One normalized input event on the selection screen's logical event
/// queue. Drag positions are the horizontal pointer coordinate; tilt
/// samples carry the rotation angle of the single axis chosen by the
/// platform adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    DragStart { x: f32 },
    DragMove { x: f32 },
    DragEnd,
    /// Pointer left the surface mid-drag. Resets without deciding.
    DragCancel,
    Key(DecisionKey),
    TiltSample { angle_deg: f32, at: std::time::Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKey {
    /// Arrow left, maps to [`Decision::Reject`].
    Left,
    /// Arrow right, maps to [`Decision::Keep`].
    Right,
}

impl From<DecisionKey> for Decision {
    fn from(value: DecisionKey) -> Self {
        match value {
            DecisionKey::Left => Decision::Reject,
            DecisionKey::Right => Decision::Keep,
        }
    }
}

/// Transient per-photo gesture state, passed into every event handler
/// and reset on every photo transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    phase: GesturePhase,
    drag: Option<DragState>,
}

impl GestureSession {
    pub fn is_committed(&self) -> bool {
        matches!(self.phase, GesturePhase::Committed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum GesturePhase {
    #[default]
    Idle,
    Previewing(Decision),
    Committed(Decision),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    origin: f32,
    delta: f32,
}

/// Projection of the gesture session for the presentation surface.
/// Holds no decision logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub transform: Transform,
    /// Candidate outcome to highlight while the signal is past the
    /// preview threshold.
    pub indicator: Option<Decision>,
}

impl ViewState {
    pub const NEUTRAL: ViewState = ViewState {
        transform: Transform::NEUTRAL,
        indicator: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub rotation_deg: f32,
}

impl Transform {
    pub const NEUTRAL: Transform = Transform {
        translate_x: 0.0,
        rotation_deg: 0.0,
    };
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureUpdate {
    pub view: ViewState,
    pub decision: Option<Decision>,
}

impl GestureUpdate {
    fn view_only(view: ViewState) -> GestureUpdate {
        GestureUpdate {
            view,
            decision: None,
        }
    }
}

pub struct GestureEngine {
    config: GestureConfig,
    tilt: TiltTracker,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> GestureEngine {
        let tilt = TiltTracker::new(config.tilt.clone());
        GestureEngine { config, tilt }
    }

    /// Reset per-photo state before the next photo is shown. Tilt
    /// baseline and cooldown survive the transition so one tilt cannot
    /// fire onto the following photo as well.
    pub fn begin_photo(&self, session: &mut GestureSession) {
        *session = GestureSession::default();
    }

    /// Reset everything including tilt state, for selection screen entry.
    pub fn reset(&mut self, session: &mut GestureSession) {
        *session = GestureSession::default();
        self.tilt.reset();
    }

    /// Feed one event through the state machine. Commits are terminal
    /// for the current photo: once a decision is returned, further
    /// events are ignored until [`GestureEngine::begin_photo`].
    pub fn handle(&mut self, session: &mut GestureSession, event: GestureEvent) -> GestureUpdate {
        if session.is_committed() {
            return GestureUpdate::view_only(ViewState::NEUTRAL);
        }
        match event {
            GestureEvent::DragStart { x } => {
                session.drag = Some(DragState {
                    origin: x,
                    delta: 0.0,
                });
                session.phase = GesturePhase::Idle;
                GestureUpdate::view_only(self.drag_view(0.0))
            }
            GestureEvent::DragMove { x } => {
                let Some(drag) = session.drag.as_mut() else {
                    return GestureUpdate::view_only(ViewState::NEUTRAL);
                };
                drag.delta = x - drag.origin;
                let delta = drag.delta;
                session.phase = if delta.abs() > self.config.preview_threshold {
                    GesturePhase::Previewing(Decision::from_signal(delta))
                } else {
                    GesturePhase::Idle
                };
                GestureUpdate::view_only(self.drag_view(delta))
            }
            GestureEvent::DragEnd => {
                let Some(drag) = session.drag.take() else {
                    return GestureUpdate::view_only(ViewState::NEUTRAL);
                };
                if drag.delta.abs() > self.config.commit_threshold {
                    self.commit(session, Decision::from_signal(drag.delta), "drag")
                } else {
                    session.phase = GesturePhase::Idle;
                    GestureUpdate::view_only(ViewState::NEUTRAL)
                }
            }
            GestureEvent::DragCancel => {
                session.drag = None;
                session.phase = GesturePhase::Idle;
                GestureUpdate::view_only(ViewState::NEUTRAL)
            }
            GestureEvent::Key(key) => self.commit(session, key.into(), "key"),
            GestureEvent::TiltSample { angle_deg, at } => match self.tilt.observe(angle_deg, at) {
                TiltOutcome::Gated | TiltOutcome::Tracking => {
                    let delta = session.drag.map(|drag| drag.delta).unwrap_or(0.0);
                    GestureUpdate::view_only(self.drag_view(delta))
                }
                TiltOutcome::Commit(decision) => {
                    let update = self.commit(session, decision, "tilt");
                    // flash the direction the tilt decided towards
                    GestureUpdate {
                        view: ViewState {
                            transform: Transform {
                                translate_x: decision.sign() * self.config.tilt.feedback_offset,
                                rotation_deg: decision.sign()
                                    * self.config.tilt.feedback_rotation_deg,
                            },
                            indicator: Some(decision),
                        },
                        ..update
                    }
                }
            },
        }
    }

    fn drag_view(&self, delta: f32) -> ViewState {
        let indicator = (delta.abs() > self.config.preview_threshold)
            .then(|| Decision::from_signal(delta));
        ViewState {
            transform: Transform {
                translate_x: delta,
                rotation_deg: delta * self.config.rotation_per_unit,
            },
            indicator,
        }
    }

    fn commit(
        &self,
        session: &mut GestureSession,
        decision: Decision,
        source: &'static str,
    ) -> GestureUpdate {
        session.phase = GesturePhase::Committed(decision);
        session.drag = None;
        debug!(?decision, source, "gesture committed");
        GestureUpdate {
            view: ViewState::NEUTRAL,
            decision: Some(decision),
        }
    }
}
