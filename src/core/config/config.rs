use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::simulation::FieldSettings;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Particle Network".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles; fixed for the lifetime of a field.
    pub count: usize,
    pub radius: f32,
    /// Initial velocity components are drawn from `[-speed/2, speed/2]`.
    pub speed: f32,
    pub color: [f32; 3],
}
impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 120,
            radius: 3.5,
            speed: 0.3,
            color: [0.39, 0.78, 1.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectionConfig {
    pub max_distance: f32,
    /// Opacity of a line between two coincident particles; falls off linearly to 0 at `max_distance`.
    pub max_opacity: f32,
    pub line_width: f32,
    pub color: [f32; 3],
}
impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_distance: 180.0,
            max_opacity: 0.5,
            line_width: 1.0,
            color: [0.39, 0.78, 1.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    pub enabled: bool,
    pub radius: f32,
    pub force: f32,
}
impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 200.0,
            force: 0.05,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Per-frame velocity multiplier.
    pub damping: f32,
    /// Velocity components below this magnitude receive a random kick.
    pub min_speed: f32,
    /// Half-width of the random kick range.
    pub jitter: f32,
}
impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            damping: 0.99,
            min_speed: 0.1,
            jitter: 0.05,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub window: WindowConfig,
    pub particles: ParticleConfig,
    pub connections: ConnectionConfig,
    pub pointer: PointerConfig,
    pub motion: MotionConfig,
    pub background: [f32; 3],
}
impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            particles: Default::default(),
            connections: Default::default(),
            pointer: Default::default(),
            motion: Default::default(),
            background: [0.02, 0.03, 0.06],
        }
    }
}

fn srgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}

/// Radius above which `validate` flags particles as oversized.
const MAX_SANE_RADIUS: f32 = 50.0;

impl NetworkConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of RON maps).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        match merged {
            Some(val) => match val.into_rust::<NetworkConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (NetworkConfig::default(), used, errors)
                }
            },
            None => (NetworkConfig::default(), used, errors),
        }
    }

    /// Simulation-facing view of this config.
    pub fn field_settings(&self) -> FieldSettings {
        FieldSettings {
            count: self.particles.count,
            radius: self.particles.radius,
            speed: self.particles.speed,
            particle_color: srgb(self.particles.color),
            max_distance: self.connections.max_distance,
            max_opacity: self.connections.max_opacity,
            line_width: self.connections.line_width,
            line_color: srgb(self.connections.color),
            pointer_enabled: self.pointer.enabled,
            mouse_radius: self.pointer.radius,
            mouse_force: self.pointer.force,
            damping: self.motion.damping,
            min_speed: self.motion.min_speed,
            jitter: self.motion.jitter,
        }
    }

    pub fn background_color(&self) -> Color {
        srgb(self.background)
    }

    /// Validate the configuration returning a list of human‑readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }

        let p = &self.particles;
        if p.count == 0 {
            w.push("particles.count is 0; nothing will be drawn".into());
        }
        if p.count > 2_000 {
            w.push(format!(
                "particles.count {} very high; pairwise connection scan is quadratic",
                p.count
            ));
        }
        if p.radius <= 0.0 {
            w.push("particles.radius must be > 0".into());
        } else if p.radius > MAX_SANE_RADIUS {
            w.push(format!(
                "particles.radius {} very large; discs are drawn as at most {} rings",
                p.radius, crate::rendering::gizmo_surface::MAX_RINGS
            ));
        }
        if p.speed < 0.0 {
            w.push(format!("particles.speed {} negative", p.speed));
        }

        let c = &self.connections;
        if c.max_distance <= 0.0 {
            w.push("connections.max_distance must be > 0; no lines will be drawn".into());
        }
        if !(0.0..=1.0).contains(&c.max_opacity) {
            w.push(format!(
                "connections.max_opacity {} outside 0..1",
                c.max_opacity
            ));
        }
        if c.line_width <= 0.0 {
            w.push("connections.line_width must be > 0".into());
        }

        if self.pointer.enabled {
            if self.pointer.radius <= 0.0 {
                w.push("pointer.radius must be > 0 when enabled".into());
            }
            if self.pointer.force < 0.0 {
                w.push("pointer.force negative -> particles are pulled toward the pointer".into());
            }
        }

        let m = &self.motion;
        if !(0.0..=1.0).contains(&m.damping) {
            w.push(format!(
                "motion.damping {} outside 0..1 (values > 1 accelerate particles)",
                m.damping
            ));
        }
        if m.min_speed < 0.0 {
            w.push("motion.min_speed negative".into());
        }
        if m.jitter < 0.0 {
            w.push("motion.jitter negative".into());
        }

        let numbers = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("window.autoClose", self.window.auto_close),
            ("particles.radius", p.radius),
            ("particles.speed", p.speed),
            ("connections.max_distance", c.max_distance),
            ("connections.max_opacity", c.max_opacity),
            ("connections.line_width", c.line_width),
            ("pointer.radius", self.pointer.radius),
            ("pointer.force", self.pointer.force),
            ("motion.damping", m.damping),
            ("motion.min_speed", m.min_speed),
            ("motion.jitter", m.jitter),
        ];
        for (label, v) in numbers {
            if !v.is_finite() {
                w.push(format!("{label} {v} is not finite"));
            }
        }

        fn check_color(w: &mut Vec<String>, label: &str, c: &[f32; 3]) {
            if c.iter().any(|v| !(0.0..=1.0).contains(v)) {
                w.push(format!("{label} {c:?} has components outside 0..1"));
            }
        }
        check_color(&mut w, "particles.color", &p.color);
        check_color(&mut w, "connections.color", &c.color);
        check_color(&mut w, "background", &self.background);
        w
    }
}
