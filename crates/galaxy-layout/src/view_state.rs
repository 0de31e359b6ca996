//! The two-state view machine: Galaxy and System.
//!
//! Galaxy shows every system of the world with none selected; System shows
//! one selected system in detail. Selecting transitions into System,
//! an explicit back action returns to Galaxy; no other states exist.
//! Every transition hands back the deterministic camera pose the renderer
//! animates toward.

use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::camera::CameraPose;
use crate::scene::{GalaxyScene, SystemScene};

/// Which view the visualization is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ViewState {
    Galaxy,
    System(Uuid),
}

/// Tracks the current view and produces the target pose on each transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    /// Starts in the galaxy view
    pub fn new() -> Self {
        Self {
            state: ViewState::Galaxy,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Galaxy → System (or a jump straight between systems).
    ///
    /// Returns the pose framing the selected system; calling twice with
    /// the same scene returns the identical pose.
    pub fn select_system(&mut self, scene: &SystemScene) -> CameraPose {
        trace!(system = %scene.id, "view transition to system");
        self.state = ViewState::System(scene.id);
        scene.camera
    }

    /// System → Galaxy on the explicit back action
    pub fn back_to_galaxy(&mut self, scene: &GalaxyScene) -> CameraPose {
        trace!("view transition to galaxy");
        self.state = ViewState::Galaxy;
        scene.camera
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}
