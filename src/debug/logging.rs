use super::modes::{DebugState, DebugStats};
use bevy::prelude::*;

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "NET frame={} t={:.3}s fps={:.1} ft_ms={:.1} particles={} pairs={} lines={} pointer={} running={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.particles,
            stats.pairs_evaluated,
            stats.lines_drawn,
            stats.pointer_present,
            stats.running
        );
    }
}
