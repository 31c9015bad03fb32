use super::modes::DebugState;
use crate::app::network::NetworkField;
use crate::rendering::gizmo_surface::to_world;
use bevy::prelude::*;

/// F1 toggles the pointer influence overlay.
pub fn debug_overlay_key_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut state: ResMut<DebugState>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        state.overlay_visible = !state.overlay_visible;
        info!(visible = state.overlay_visible, "Pointer overlay toggled");
    }
}

/// Outline the region where the pointer pushes particles.
pub fn debug_pointer_overlay_system(
    state: Res<DebugState>,
    field: Option<Res<NetworkField>>,
    mut gizmos: Gizmos,
) {
    if !state.overlay_visible {
        return;
    }
    let Some(field) = field else {
        return;
    };
    let Some(pointer) = field.pointer().position() else {
        return;
    };
    let settings = field.settings();
    let center = to_world(pointer, field.bounds().size());
    gizmos.circle_2d(center, settings.mouse_radius, Color::srgb(1.0, 0.5, 0.0));
    gizmos.circle_2d(center, 4.0, Color::srgb(1.0, 1.0, 0.2));
}
