//! Construction-time parameters for a particle field.
//!
//! `FieldSettings` is the simulation's own view of the configuration; the
//! RON-facing `NetworkConfig` converts into it with `field_settings()`.

use bevy::color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSettings {
    pub count: usize, // number of particles, fixed per field
    pub radius: f32, // particle radius
    pub speed: f32, // initial velocity spread, components in [-speed/2, speed/2]
    pub particle_color: Color,
    pub max_distance: f32, // proximity line cutoff
    pub max_opacity: f32, // line opacity at distance 0
    pub line_width: f32,
    pub line_color: Color,
    pub pointer_enabled: bool,
    pub mouse_radius: f32, // pointer influence radius
    pub mouse_force: f32, // velocity kick at distance 0
    pub damping: f32, // per-step velocity multiplier
    pub min_speed: f32, // floor below which a component receives jitter
    pub jitter: f32, // jitter half-range
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 120,
            radius: 3.5,
            speed: 0.3,
            particle_color: Color::srgb(0.39, 0.78, 1.0),
            max_distance: 180.0,
            max_opacity: 0.5,
            line_width: 1.0,
            line_color: Color::srgb(0.39, 0.78, 1.0),
            pointer_enabled: true,
            mouse_radius: 200.0,
            mouse_force: 0.05,
            damping: 0.99,
            min_speed: 0.1,
            jitter: 0.05,
        }
    }
}

impl FieldSettings {
    /// Velocity kick applied by the pointer to a particle `distance` away.
    ///
    /// Linear falloff: `mouse_force` at distance 0, exactly 0 at or beyond `mouse_radius`.
    pub fn pointer_force(&self, distance: f32) -> f32 {
        if !self.pointer_enabled || self.mouse_radius <= 0.0 || !(distance < self.mouse_radius) {
            return 0.0;
        }
        let falloff = (self.mouse_radius - distance.max(0.0)) / self.mouse_radius;
        falloff * self.mouse_force
    }

    /// Opacity of the proximity line for a pair `distance` apart, `None` when no line is drawn.
    pub fn line_opacity(&self, distance: f32) -> Option<f32> {
        if self.max_distance <= 0.0 || !(distance < self.max_distance) {
            return None;
        }
        Some((1.0 - distance / self.max_distance) * self.max_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_force_is_monotonic_inside_radius() {
        let s = FieldSettings::default();
        let near = s.pointer_force(20.0);
        let far = s.pointer_force(150.0);
        assert!(near > far);
        assert!(far > 0.0);
        assert!((s.pointer_force(0.0) - s.mouse_force).abs() < 1e-7);
    }

    #[test]
    fn pointer_force_zero_outside_radius() {
        let s = FieldSettings::default();
        assert_eq!(s.pointer_force(200.0), 0.0);
        assert_eq!(s.pointer_force(250.0), 0.0);
        assert_eq!(s.pointer_force(f32::NAN), 0.0);
    }

    #[test]
    fn pointer_force_disabled() {
        let s = FieldSettings {
            pointer_enabled: false,
            ..Default::default()
        };
        assert_eq!(s.pointer_force(0.0), 0.0);
    }

    #[test]
    fn line_opacity_endpoints() {
        let s = FieldSettings::default();
        assert_eq!(s.line_opacity(0.0), Some(0.5));
        assert_eq!(s.line_opacity(180.0), None);
        assert_eq!(s.line_opacity(200.0), None);
        let mid = s.line_opacity(90.0).unwrap();
        assert!((mid - 0.25).abs() < 1e-6);
    }
}
