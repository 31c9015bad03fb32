use bevy::prelude::*;

use super::gizmo_surface::apply_line_width;
use crate::core::config::NetworkConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            sync_visual_config.run_if(resource_changed::<NetworkConfig>),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn(Camera2d);
}

/// Push background color and line width from the config into the renderer.
pub fn sync_visual_config(
    cfg: Res<NetworkConfig>,
    clear: Option<ResMut<ClearColor>>,
    gizmo_store: Option<ResMut<GizmoConfigStore>>,
) {
    if let Some(mut clear) = clear {
        clear.0 = cfg.background_color();
    }
    if let Some(mut store) = gizmo_store {
        apply_line_width(&mut store, cfg.connections.line_width);
    }
}
