//! A single point in the network: kinematic state plus its per-frame step.

use bevy::math::Vec2;
use rand::Rng;

use super::settings::FieldSettings;
use super::states::Bounds;
use crate::rendering::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// Uniform in `[-half, half]`; 0 when the range is empty or not representable.
fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 && (half * 2.0).is_finite() {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// A freshly randomized particle inside `bounds`.
    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, settings: &FieldSettings, rng: &mut R) -> Self {
        let mut p = Self::new(Vec2::ZERO, Vec2::ZERO, settings.radius);
        p.reset(bounds, settings, rng);
        p
    }

    /// Replace the whole state: uniform position in `[0, w) x [0, h)`,
    /// velocity components uniform in `[-speed/2, speed/2]`.
    pub fn reset<R: Rng + ?Sized>(&mut self, bounds: Bounds, settings: &FieldSettings, rng: &mut R) {
        self.position = Vec2::new(
            sample_extent(rng, bounds.width),
            sample_extent(rng, bounds.height),
        );
        let half = settings.speed.abs() * 0.5;
        self.velocity = Vec2::new(sample_symmetric(rng, half), sample_symmetric(rng, half));
        self.radius = settings.radius;
    }

    /// Advance one frame: pointer repulsion, Euler step, damping, motion floor, wall reflection.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        pointer: Option<Vec2>,
        bounds: Bounds,
        settings: &FieldSettings,
        rng: &mut R,
    ) {
        if let Some(pointer) = pointer {
            self.apply_pointer(pointer, settings);
        }

        // One step per frame, no dt scaling
        self.position += self.velocity;
        self.velocity *= settings.damping;

        if self.velocity.x.abs() < settings.min_speed {
            self.velocity.x += sample_symmetric(rng, settings.jitter);
        }
        if self.velocity.y.abs() < settings.min_speed {
            self.velocity.y += sample_symmetric(rng, settings.jitter);
        }

        self.reflect(bounds);
    }

    /// Push away from the pointer, harder the closer it is.
    pub fn apply_pointer(&mut self, pointer: Vec2, settings: &FieldSettings) {
        let offset = self.position - pointer;
        let distance = offset.length();
        let force = settings.pointer_force(distance);
        if force <= 0.0 {
            return;
        }
        // atan2 is undefined for a coincident pointer; push along +x instead
        let angle = if distance > f32::EPSILON {
            offset.y.atan2(offset.x)
        } else {
            0.0
        };
        self.velocity += Vec2::new(angle.cos(), angle.sin()) * force;
    }

    /// Elastic bounce: a coordinate past a wall is clamped onto it and that velocity component negated.
    pub fn reflect(&mut self, bounds: Bounds) {
        if self.position.x < 0.0 {
            self.position.x = 0.0;
            self.velocity.x = -self.velocity.x;
        } else if self.position.x > bounds.width {
            self.position.x = bounds.width;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 {
            self.position.y = 0.0;
            self.velocity.y = -self.velocity.y;
        } else if self.position.y > bounds.height {
            self.position.y = bounds.height;
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, settings: &FieldSettings) {
        surface.fill_circle(self.position, self.radius, settings.particle_color);
    }
}
