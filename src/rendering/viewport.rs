use bevy::prelude::*;

use crate::simulation::Bounds;

/// On-screen rectangle of the drawing surface, in logical window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub origin: Vec2,
    pub bounds: Bounds,
}

impl SurfaceRect {
    /// Measure the surface: the camera viewport when one is known, the whole window otherwise.
    pub fn measure(window: &Window, camera: Option<&Camera>) -> Self {
        match camera.and_then(|c| c.logical_viewport_rect()) {
            Some(rect) => Self {
                origin: rect.min,
                bounds: Bounds::new(rect.width(), rect.height()),
            },
            None => Self {
                origin: Vec2::ZERO,
                bounds: Bounds::new(window.width(), window.height()),
            },
        }
    }

    /// Translate a window cursor position into surface-local coordinates.
    /// `None` when the position lies outside the surface.
    pub fn to_local(&self, window_pos: Vec2) -> Option<Vec2> {
        let local = window_pos - self.origin;
        self.bounds.contains(local).then_some(local)
    }
}
