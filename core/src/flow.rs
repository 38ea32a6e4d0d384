use tracing::debug;

use crate::capability::Capability;
use crate::capture::{CaptureError, CaptureSession};
use crate::gesture::{GestureConfig, GestureEvent, ViewState};
use crate::model::repository::{
    self,
    album::{CreateAlbum, InvalidAlbum},
    kv::KvStore,
};
use crate::model::{Album, AlbumId, LocationLabel, Photo, PhotoId, Size};
use crate::selection::{PassOutcome, SelectionPass};
use crate::slideshow::Slideshow;

/// The app's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Screen {
    Home,
    Camera,
    Selection,
    Overview,
    Slideshow,
}

/// Ordered effects the presentation layer executes on navigation.
/// Input listener registration is tied to exactly these: subscribe on
/// `Enter`, unsubscribe on `Leave`. Repeated entries cannot stack
/// handlers because every entry is paired with a leave first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    Leave(Screen),
    Enter(Screen),
}

#[derive(Debug)]
pub struct Navigator {
    current: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator {
            current: Screen::Home,
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn goto(&mut self, screen: Screen) -> Vec<ScreenTransition> {
        if screen == self.current {
            return Vec::new();
        }
        debug!(from = %self.current, to = %screen, "navigating");
        let transitions = vec![
            ScreenTransition::Leave(self.current),
            ScreenTransition::Enter(screen),
        ];
        self.current = screen;
        transitions
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("action does not apply to the current screen")]
    WrongScreen,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    InvalidAlbum(#[from] InvalidAlbum),
    #[error("could not persist album: {0}")]
    Store(eyre::Report),
}

enum Stage {
    Idle,
    Capturing(CaptureSession),
    Selecting(SelectionPass),
    Reviewing { kept: Vec<Photo> },
    Replaying(Slideshow),
}

/// User-visible notices raised by the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowNotice {
    /// Every photo was rejected; back to square one.
    AllPhotosRejected,
}

/// Result of feeding one gesture event through the selection screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionUpdate {
    pub view: ViewState,
    pub transitions: Vec<ScreenTransition>,
    pub notice: Option<FlowNotice>,
}

/// Top-level session flow: capture a burst, decide it, review the
/// survivors, persist the album, replay it later. Owns the current
/// screen, the stage-specific state, and the routing rules between
/// them.
pub struct AppFlow {
    navigator: Navigator,
    stage: Stage,
    gesture_config: GestureConfig,
}

impl AppFlow {
    pub fn new(gesture_config: GestureConfig) -> AppFlow {
        AppFlow {
            navigator: Navigator::default(),
            stage: Stage::Idle,
            gesture_config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Home → Camera. Camera capability is the hard gate.
    pub fn start_session(
        &mut self,
        camera: Capability,
    ) -> Result<Vec<ScreenTransition>, FlowError> {
        let session = CaptureSession::begin(camera)?;
        self.stage = Stage::Capturing(session);
        Ok(self.navigator.goto(Screen::Camera))
    }

    pub fn capture_photo(&mut self, data: Vec<u8>, size: Size) -> Result<PhotoId, FlowError> {
        match &mut self.stage {
            Stage::Capturing(session) => Ok(session.capture(data, size)),
            _ => Err(FlowError::WrongScreen),
        }
    }

    /// Photos captured so far, for the preview strip.
    pub fn captured_photos(&self) -> Option<&[Photo]> {
        match &self.stage {
            Stage::Capturing(session) => Some(session.photos()),
            _ => None,
        }
    }

    /// Camera → Selection, handing the captured burst to a fresh pass.
    /// Finishing without a photo keeps the capture session open.
    pub fn finish_capture(&mut self) -> Result<Vec<ScreenTransition>, FlowError> {
        match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::Capturing(session) => {
                if session.is_empty() {
                    self.stage = Stage::Capturing(session);
                    return Err(CaptureError::NoPhotos.into());
                }
                let photos = session.finish()?;
                self.stage =
                    Stage::Selecting(SelectionPass::new(photos, self.gesture_config.clone()));
                Ok(self.navigator.goto(Screen::Selection))
            }
            other => {
                self.stage = other;
                Err(FlowError::WrongScreen)
            }
        }
    }

    pub fn selection_pass(&self) -> Option<&SelectionPass> {
        match &self.stage {
            Stage::Selecting(pass) => Some(pass),
            _ => None,
        }
    }

    /// Feed one gesture event through the running pass and route its
    /// terminal outcomes: completion shows the overview, a fully
    /// rejected pass surfaces a notice and returns Home.
    pub fn selection_event(&mut self, event: GestureEvent) -> Result<SelectionUpdate, FlowError> {
        let Stage::Selecting(pass) = &mut self.stage else {
            return Err(FlowError::WrongScreen);
        };
        let update = pass.handle_event(event);
        match update.outcome {
            None => Ok(SelectionUpdate {
                view: update.view,
                transitions: Vec::new(),
                notice: None,
            }),
            Some(PassOutcome::AllRejected) => {
                self.stage = Stage::Idle;
                Ok(SelectionUpdate {
                    view: ViewState::NEUTRAL,
                    transitions: self.navigator.goto(Screen::Home),
                    notice: Some(FlowNotice::AllPhotosRejected),
                })
            }
            Some(PassOutcome::Complete(kept)) => {
                self.stage = Stage::Reviewing { kept };
                Ok(SelectionUpdate {
                    view: ViewState::NEUTRAL,
                    transitions: self.navigator.goto(Screen::Overview),
                    notice: None,
                })
            }
        }
    }

    /// Kept photos awaiting album creation on the overview screen.
    pub fn kept_photos(&self) -> Option<&[Photo]> {
        match &self.stage {
            Stage::Reviewing { kept } => Some(kept),
            _ => None,
        }
    }

    /// Persist the reviewed pass as a named album and return Home.
    /// Validation failures leave the overview untouched so the user can
    /// correct the input.
    pub async fn create_album(
        &mut self,
        store: &impl KvStore,
        name: String,
        location: LocationLabel,
    ) -> Result<(AlbumId, Vec<ScreenTransition>), FlowError> {
        let Stage::Reviewing { kept } = &self.stage else {
            return Err(FlowError::WrongScreen);
        };
        let create = CreateAlbum {
            name,
            photos: kept.clone(),
            location,
        }
        .validate()?;
        let id = repository::album::create_album(store, create)
            .await
            .map_err(FlowError::Store)?;
        self.stage = Stage::Idle;
        Ok((id, self.navigator.goto(Screen::Home)))
    }

    /// Home → Slideshow for a stored album.
    pub fn open_slideshow(&mut self, album: Album) -> Result<Vec<ScreenTransition>, FlowError> {
        if !matches!(self.stage, Stage::Idle) {
            return Err(FlowError::WrongScreen);
        }
        self.stage = Stage::Replaying(Slideshow::new(album));
        Ok(self.navigator.goto(Screen::Slideshow))
    }

    pub fn slideshow_mut(&mut self) -> Option<&mut Slideshow> {
        match &mut self.stage {
            Stage::Replaying(slideshow) => Some(slideshow),
            _ => None,
        }
    }

    /// Back button from any screen: abandon whatever is in progress.
    /// The adapter releases the camera stream when its screen leaves.
    pub fn back_to_home(&mut self) -> Vec<ScreenTransition> {
        self.stage = Stage::Idle;
        self.navigator.goto(Screen::Home)
    }
}
