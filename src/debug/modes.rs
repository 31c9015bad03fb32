use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub overlay_visible: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub particles: usize,
    pub pairs_evaluated: usize,
    pub lines_drawn: usize,
    pub pointer_present: bool,
    pub running: bool,
}
