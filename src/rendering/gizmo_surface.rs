use bevy::prelude::*;

use super::surface::Surface;

/// Spacing between the concentric rings that fill a disc.
const RING_STEP: f32 = 0.75;
/// Upper bound on rings per disc; larger discs get wider spacing.
pub const MAX_RINGS: usize = 64;

/// Radii of the rings that fill a disc, outermost first.
pub fn ring_radii(radius: f32) -> impl Iterator<Item = f32> {
    let (count, step) = if radius.is_finite() && radius > 0.0 {
        let step = RING_STEP.max(radius / MAX_RINGS as f32);
        (((radius / step).ceil() as usize).min(MAX_RINGS), step)
    } else {
        (0, RING_STEP)
    };
    (0..count).map(move |i| radius - i as f32 * step)
}

/// `Surface` backed by Bevy immediate-mode gizmos.
///
/// Surface-local coordinates (top-left origin, y down) are mapped to the world space
/// of a default `Camera2d` centered on the surface (y up). Gizmos have no filled
/// primitive, so discs are drawn as concentric rings. Line width is taken from the
/// default gizmo group config, not from the per-line argument.
pub struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    size: Vec2,
}

impl<'a, 'w, 's> GizmoSurface<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, size: Vec2) -> Self {
        Self { gizmos, size }
    }

    pub fn to_world(&self, local: Vec2) -> Vec2 {
        to_world(local, self.size)
    }
}

pub fn to_world(local: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(local.x - size.x * 0.5, size.y * 0.5 - local.y)
}

impl Surface for GizmoSurface<'_, '_, '_> {
    fn clear(&mut self) {
        // Gizmo buffers are flushed by Bevy every frame
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let c = self.to_world(center);
        for r in ring_radii(radius) {
            self.gizmos.circle_2d(c, r, color);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Color) {
        let (a, b) = (self.to_world(from), self.to_world(to));
        self.gizmos.line_2d(a, b, color);
    }
}

/// Keep the default gizmo line width in step with the configured connection width.
pub fn apply_line_width(store: &mut GizmoConfigStore, width: f32) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    if (config.line.width - width).abs() > f32::EPSILON {
        config.line.width = width.max(0.1);
    }
}
