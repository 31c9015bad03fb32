use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::app::network::NetworkField;
use crate::core::system::NetworkSet;
use crate::rendering::SurfaceRect;

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, track_pointer.in_set(NetworkSet::Input));
    }
}

/// Window position of the primary pointer: the first active touch, else the mouse cursor.
fn primary_pointer_pos(window: &Window, touches: Option<&Touches>) -> Option<Vec2> {
    // Touch positions are already in logical coordinates (same as cursor_position)
    if let Some(touch) = touches.and_then(|t| t.iter().next()) {
        return Some(touch.position());
    }
    window.cursor_position()
}

/// Feed the pointer into the field as surface-local coordinates; a pointer that is
/// off the window or outside the surface rectangle counts as having left.
pub fn track_pointer(
    field: Option<ResMut<NetworkField>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Camera>,
) {
    let Some(mut field) = field else {
        return;
    };
    let Ok(window) = windows.single() else {
        if field.pointer().is_present() {
            field.on_pointer_leave();
        }
        return;
    };
    let rect = SurfaceRect::measure(window, cameras.iter().next());
    let local = primary_pointer_pos(window, touches.as_deref()).and_then(|p| rect.to_local(p));
    match local {
        Some(local) => {
            if field.pointer().position() != Some(local) {
                field.on_pointer_move(local);
            }
        }
        None => {
            if field.pointer().is_present() {
                field.on_pointer_leave();
            }
        }
    }
}
