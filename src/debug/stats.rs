use super::modes::{DebugState, DebugStats};
use crate::app::field_loop::FieldLoop;
use crate::app::network::{LastTick, NetworkField};
use bevy::prelude::*;

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    last: Res<LastTick>,
    field_loop: Res<FieldLoop>,
    field: Option<Res<NetworkField>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.particles = last.0.particles_rendered;
    stats.pairs_evaluated = last.0.connections.pairs_evaluated;
    stats.lines_drawn = last.0.connections.lines_drawn;
    stats.pointer_present = field.is_some_and(|f| f.pointer().is_present());
    stats.running = field_loop.is_running();
}
