//! Explicit run/stop handle for the per-frame loop.
//!
//! The tick system is gated on `FieldLoop::is_running`; stopping leaves the field
//! intact and redraws it frozen until resumed.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLoop {
    running: bool,
}

impl Default for FieldLoop {
    fn default() -> Self {
        Self { running: true }
    }
}

impl FieldLoop {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Flip the state, returning the new one.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }
}

/// Run condition for the tick system.
pub fn field_loop_running(state: Res<FieldLoop>) -> bool {
    state.is_running()
}

/// Space stops / restarts the loop.
pub fn toggle_loop_on_key(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<FieldLoop>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::Space) {
        let running = state.toggle();
        info!(running, "Field loop toggled");
    }
}
