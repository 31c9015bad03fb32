//! Debug module: feature gated stats, periodic logging and a pointer overlay.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use crate::core::system::NetworkSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        use overlay::{debug_overlay_key_system, debug_pointer_overlay_system};
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(
                Update,
                (
                    debug_overlay_key_system.in_set(NetworkSet::Input),
                    (
                        debug_stats_collect_system,
                        debug_logging_system,
                        debug_pointer_overlay_system,
                    )
                        .chain()
                        .in_set(NetworkSet::Diagnostics),
                ),
            );
    }
}
