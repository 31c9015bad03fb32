//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages:
//! 1. Input (pointer tracking, resize re-measure, loop toggle)
//! 2. Simulate (tick: clear, connect, update + draw particles)
//! 3. Diagnostics (stats / periodic logging)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum NetworkSet {
    Input,
    Simulate,
    Diagnostics,
}

/// Split of the Simulate stage by the run/stop handle: `Running` advances the
/// field, `Stopped` redraws it frozen.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FieldLoopSet {
    Running,
    Stopped,
}
