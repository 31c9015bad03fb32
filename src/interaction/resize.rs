use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::pointer::track_pointer;
use crate::app::network::NetworkField;
use crate::core::system::NetworkSet;
use crate::rendering::SurfaceRect;

pub struct ResizePlugin;

impl Plugin for ResizePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            handle_window_resize
                .in_set(NetworkSet::Input)
                .before(track_pointer),
        );
    }
}

/// Re-measure the surface after any resize notification this frame and rescale the field.
///
/// Notifications carry no meaning beyond "something changed"; bursts are coalesced
/// into a single re-measure.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    field: Option<ResMut<NetworkField>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Camera>,
) {
    if resize_events.read().last().is_none() {
        return;
    }
    let Some(mut field) = field else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let rect = SurfaceRect::measure(window, cameras.iter().next());
    let before = field.bounds();
    if rect.bounds == before {
        return;
    }
    if field.resize(rect.bounds) {
        debug!(
            from = ?(before.width, before.height),
            to = ?(rect.bounds.width, rect.bounds.height),
            "Particle field rescaled"
        );
    } else {
        warn!(
            width = rect.bounds.width,
            height = rect.bounds.height,
            "Ignoring resize to degenerate surface"
        );
    }
}
