//! The particle field: a fixed set of particles, the pointer and the viewport,
//! stepped and drawn once per frame.

use bevy::color::Alpha;
use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::FieldError;
use super::particle::Particle;
use super::settings::FieldSettings;
use super::states::{Bounds, PointerState};
use crate::rendering::surface::Surface;

/// Outcome of one pairwise connection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStats {
    pub pairs_evaluated: usize,
    pub lines_drawn: usize,
}

/// Outcome of one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub connections: ConnectionStats,
    pub particles_rendered: usize,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    bounds: Bounds,
    particles: Vec<Particle>,
    pointer: PointerState,
    settings: FieldSettings,
    rng: StdRng,
}

impl ParticleField {
    /// Measure the surface and scatter `settings.count` particles over it.
    ///
    /// `surface` is `None` when the host could not resolve a drawing surface; the
    /// field is then never created and the caller stays inactive.
    pub fn initialize(surface: Option<Bounds>, settings: FieldSettings) -> Result<Self, FieldError> {
        Self::initialize_with_rng(surface, settings, StdRng::from_entropy())
    }

    pub fn initialize_with_rng(
        surface: Option<Bounds>,
        settings: FieldSettings,
        mut rng: StdRng,
    ) -> Result<Self, FieldError> {
        let bounds = surface.ok_or(FieldError::SurfaceUnavailable)?;
        if !bounds.is_valid() {
            return Err(FieldError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        let particles = (0..settings.count)
            .map(|_| Particle::spawn(bounds, &settings, &mut rng))
            .collect();
        Ok(Self {
            bounds,
            particles,
            pointer: PointerState::default(),
            settings,
            rng,
        })
    }

    /// Build a field around explicit particles; the particle count overrides `settings.count`.
    pub fn from_particles(
        bounds: Bounds,
        mut settings: FieldSettings,
        particles: Vec<Particle>,
        rng: StdRng,
    ) -> Result<Self, FieldError> {
        if !bounds.is_valid() {
            return Err(FieldError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        settings.count = particles.len();
        Ok(Self {
            bounds,
            particles,
            pointer: PointerState::default(),
            settings,
            rng,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adopt a new viewport size, rescaling particles so their relative placement is preserved.
    ///
    /// Returns `false` and leaves the field untouched when `bounds` is degenerate.
    pub fn resize(&mut self, bounds: Bounds) -> bool {
        if !bounds.is_valid() {
            return false;
        }
        let old = self.bounds;
        if old.is_valid() && old != bounds {
            for p in self.particles.iter_mut() {
                p.position.x = p.position.x * bounds.width / old.width;
                p.position.y = p.position.y * bounds.height / old.height;
            }
        }
        self.bounds = bounds;
        true
    }

    /// `local` is relative to the surface's own top-left corner.
    pub fn on_pointer_move(&mut self, local: Vec2) {
        self.pointer.moved(local);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.left();
    }

    /// Stroke a fading line between every pair closer than `max_distance`.
    ///
    /// Each unordered pair is visited exactly once, `n * (n - 1) / 2` in total.
    pub fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S) -> ConnectionStats {
        let s = &self.settings;
        let mut stats = ConnectionStats::default();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                stats.pairs_evaluated += 1;
                let distance = a.position.distance(b.position);
                if let Some(opacity) = s.line_opacity(distance) {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        s.line_width,
                        s.line_color.with_alpha(opacity),
                    );
                    stats.lines_drawn += 1;
                }
            }
        }
        stats
    }

    /// One frame: clear, connect, then update and draw each particle in order.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        surface.clear();
        let connections = self.draw_connections(surface);

        let Self {
            bounds,
            particles,
            pointer,
            settings,
            rng,
        } = self;
        for p in particles.iter_mut() {
            p.update(pointer.position(), *bounds, settings, rng);
            p.render(surface, settings);
        }

        TickStats {
            connections,
            particles_rendered: particles.len(),
        }
    }

    /// Redraw the current state without advancing it (used while the loop is stopped).
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> TickStats {
        surface.clear();
        let connections = self.draw_connections(surface);
        for p in &self.particles {
            p.render(surface, &self.settings);
        }
        TickStats {
            connections,
            particles_rendered: self.particles.len(),
        }
    }

    /// Swap in new settings at runtime. Radii are re-applied to every particle.
    ///
    /// The particle count cannot change; a differing `count` is ignored, the remaining
    /// settings are still applied and `FixedCardinality` is returned so the caller can report it.
    pub fn apply_settings(&mut self, mut settings: FieldSettings) -> Result<(), FieldError> {
        let requested = settings.count;
        settings.count = self.particles.len();
        for p in self.particles.iter_mut() {
            p.radius = settings.radius;
        }
        self.settings = settings;
        if requested != self.particles.len() {
            return Err(FieldError::FixedCardinality {
                current: self.particles.len(),
                requested,
            });
        }
        Ok(())
    }
}
