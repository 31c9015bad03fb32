//! Immediate-mode 2D drawing seam between the particle field and whatever paints pixels.
//!
//! Coordinates are surface-local (top-left origin, y down). Implementations map them
//! to their own space.

use bevy::color::Color;
use bevy::math::Vec2;

pub trait Surface {
    /// Wipe everything drawn in the previous frame.
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

/// Surface that keeps the commands of the current frame; used for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    /// Commands issued since the last `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Total number of `clear` calls (one per frame when driven by `tick`).
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_frame() {
        let mut s = RecordingSurface::default();
        s.fill_circle(Vec2::ZERO, 1.0, Color::WHITE);
        s.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, Color::WHITE);
        assert_eq!(s.lines().count(), 1);
        s.clear();
        assert_eq!(s.commands(), &[DrawCommand::Clear]);
        assert_eq!(s.clear_count(), 1);
        assert_eq!(s.circles().count(), 0);
    }
}
