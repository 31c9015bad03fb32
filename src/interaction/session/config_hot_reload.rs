// Runtime config hot-reload (desktop only).
// Watches the configured RON layers for modification timestamp changes and, when detected,
// re-loads the layered config. On success updates the `NetworkConfig` resource and applies
// the new settings to the running field (window title/size, colors, radii, forces).
// The particle count is fixed per field; a changed count is reported and ignored.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::app::network::NetworkField;
use crate::core::config::NetworkConfig;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    /// Polling interval seconds.
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/network.ron"),
                PathBuf::from("assets/config/network.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl FromWorld for ConfigReloadState {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<ConfigReloadSettings>()
            .map_or(0.5, |s| s.interval_secs.max(0.05));
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        // Only meaningful on native (std::fs) targets.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

/// Record newer modification times; true when any watched file changed since the last call.
fn detect_modified(last_mod: &mut HashMap<PathBuf, SystemTime>, paths: &[PathBuf]) -> bool {
    use std::fs;
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in paths {
        let Ok(mod_time) = fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        let entry = last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    dirty
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<NetworkConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    field: Option<ResMut<NetworkField>>,
) {
    // Allow changing interval at runtime by adjusting timer duration.
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(settings.interval_secs.max(0.05)));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }

    if !detect_modified(&mut state.last_mod, &settings.paths) {
        return;
    }

    let (new_cfg, _used, errors) = NetworkConfig::load_layered(settings.paths.iter());
    for e in errors {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }

    // Replace resource only if different (avoid spurious change events & work).
    if *cfg_res == new_cfg {
        return;
    }
    info!("Config hot-reload applied");
    for w in new_cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    if let Some(mut field) = field {
        if let Err(e) = field.apply_settings(new_cfg.field_settings()) {
            warn!("CONFIG HOT-RELOAD: {e}; keeping current particle count");
        }
    }
    *cfg_res = new_cfg;
}
