//! Plain state types shared by the particle field and its host.
//!
//! All coordinates are surface-local: origin at the surface's top-left corner,
//! x grows to the right and y grows downward, in logical pixels.

use bevy::math::Vec2;

/// Current size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Pointer position over the surface, absent while the pointer is outside it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }

    /// Non-finite coordinates are dropped so they never reach the force math.
    pub fn moved(&mut self, position: Vec2) {
        self.position = position.is_finite().then_some(position);
    }

    pub fn left(&mut self) {
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_validity() {
        assert!(Bounds::new(10.0, 5.0).is_valid());
        assert!(!Bounds::new(0.0, 5.0).is_valid());
        assert!(!Bounds::new(10.0, -1.0).is_valid());
        assert!(!Bounds::new(f32::NAN, 5.0).is_valid());
    }

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains(Vec2::ZERO));
        assert!(b.contains(Vec2::new(100.0, 50.0)));
        assert!(!b.contains(Vec2::new(100.1, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn pointer_move_and_leave() {
        let mut p = PointerState::default();
        assert!(!p.is_present());
        p.moved(Vec2::new(3.0, 4.0));
        assert_eq!(p.position(), Some(Vec2::new(3.0, 4.0)));
        p.moved(Vec2::new(f32::NAN, 1.0));
        assert_eq!(p.position(), None);
        p.moved(Vec2::new(1.0, 1.0));
        p.left();
        assert!(!p.is_present());
    }
}
