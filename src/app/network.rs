use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::field_loop::{field_loop_running, toggle_loop_on_key, FieldLoop};
use crate::core::config::NetworkConfig;
use crate::core::resources::{ConfigLoadReport, RngSeed};
use crate::core::system::{FieldLoopSet, NetworkSet};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::interaction::pointer::PointerPlugin;
use crate::interaction::resize::ResizePlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::{GizmoSurface, SurfaceRect};
use crate::simulation::{ParticleField, TickStats};

/// The running field. Absent while the host has no usable surface.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct NetworkField(pub ParticleField);

/// Statistics of the most recent frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LastTick(pub TickStats);

pub struct ParticleNetworkPlugin;

impl Plugin for ParticleNetworkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NetworkConfig>()
            .init_resource::<ConfigLoadReport>()
            .init_resource::<LastTick>();
        configure_network_sets(app);
        app.add_plugins((
            CameraPlugin,
            ResizePlugin,
            PointerPlugin,
            AutoClosePlugin,
            ConfigHotReloadPlugin,
        ))
        .add_systems(Startup, (log_config_report, initialize_field).chain())
        .add_systems(
            Update,
            (
                toggle_loop_on_key.in_set(NetworkSet::Input),
                tick_field.in_set(FieldLoopSet::Running),
                draw_frozen_field.in_set(FieldLoopSet::Stopped),
            ),
        );

        #[cfg(feature = "debug")]
        {
            app.add_plugins(DebugPlugin);
        }
    }
}

/// Order the per-frame stages and gate the Simulate stage on the `FieldLoop` handle.
pub fn configure_network_sets(app: &mut App) {
    app.init_resource::<FieldLoop>()
        .configure_sets(
            Update,
            (
                NetworkSet::Input,
                NetworkSet::Simulate,
                NetworkSet::Diagnostics,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                FieldLoopSet::Running.run_if(field_loop_running),
                FieldLoopSet::Stopped.run_if(not(field_loop_running)),
            )
                .in_set(NetworkSet::Simulate),
        );
}

fn log_config_report(report: Res<ConfigLoadReport>, cfg: Res<NetworkConfig>) {
    for e in &report.errors {
        warn!("CONFIG LOAD ISSUE: {e}");
    }
    if report.used.is_empty() {
        info!("No config layers found; using defaults");
    } else {
        info!(used = ?report.used, "Config layers loaded");
    }
    for w in cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
}

/// Measure the primary window and create the field. Without a window the
/// field is never created and every other system stays a no-op.
pub fn initialize_field(
    mut commands: Commands,
    cfg: Res<NetworkConfig>,
    seed: Option<Res<RngSeed>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Camera>,
) {
    let surface = windows
        .single()
        .ok()
        .map(|w| SurfaceRect::measure(w, cameras.iter().next()).bounds);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.0),
        None => StdRng::from_entropy(),
    };
    match ParticleField::initialize_with_rng(surface, cfg.field_settings(), rng) {
        Ok(field) => {
            let bounds = field.bounds();
            info!(
                particles = field.len(),
                width = bounds.width,
                height = bounds.height,
                "Particle field running"
            );
            commands.insert_resource(NetworkField(field));
        }
        Err(e) => warn!("Particle field inactive: {e}"),
    }
}

pub fn tick_field(
    field: Option<ResMut<NetworkField>>,
    mut gizmos: Gizmos,
    mut last: ResMut<LastTick>,
) {
    let Some(mut field) = field else {
        return;
    };
    let size = field.bounds().size();
    let mut surface = GizmoSurface::new(&mut gizmos, size);
    last.0 = field.tick(&mut surface);
}

pub fn draw_frozen_field(
    field: Option<Res<NetworkField>>,
    mut gizmos: Gizmos,
    mut last: ResMut<LastTick>,
) {
    let Some(field) = field else {
        return;
    };
    let mut surface = GizmoSurface::new(&mut gizmos, field.bounds().size());
    last.0 = field.render(&mut surface);
}
