use std::fmt;

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::config::NetworkConfig;
use crate::rendering::RecordingSurface;
use crate::simulation::{Bounds, ParticleField};

/// Outcome of a windowless run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u32,
    pub particles: usize,
    pub bounds: Bounds,
    pub lines_last_frame: usize,
    pub lines_total: u64,
    pub max_lines: usize,
    pub min_lines: usize,
    pub contained: bool,
}

impl HeadlessReport {
    pub fn mean_lines(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.lines_total as f64 / self.frames as f64
        }
    }
}

impl fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, {} particles on {}x{}: lines min={} mean={:.1} max={} last={}, contained={}",
            self.frames,
            self.particles,
            self.bounds.width,
            self.bounds.height,
            self.min_lines,
            self.mean_lines(),
            self.max_lines,
            self.lines_last_frame,
            self.contained
        )
    }
}

/// Run the field for `frames` ticks against a recording surface sized like the
/// configured window. The pointer sweeps diagonally across the surface so the
/// repulsion path is exercised too.
pub fn run_headless(cfg: &NetworkConfig, frames: u32, seed: Option<u64>) -> Result<HeadlessReport> {
    let bounds = Bounds::new(cfg.window.width, cfg.window.height);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut field = ParticleField::initialize_with_rng(Some(bounds), cfg.field_settings(), rng)
        .context("initializing headless particle field")?;
    ensure!(frames > 0, "headless run needs at least one frame");

    let mut surface = RecordingSurface::default();
    let mut report = HeadlessReport {
        frames,
        particles: field.len(),
        bounds,
        lines_last_frame: 0,
        lines_total: 0,
        max_lines: 0,
        min_lines: usize::MAX,
        contained: true,
    };

    for frame in 0..frames {
        let t = frame as f32 / frames as f32;
        if t < 0.5 {
            field.on_pointer_move(bounds.size() * (t * 2.0));
        } else {
            field.on_pointer_leave();
        }
        let stats = field.tick(&mut surface);
        let lines = stats.connections.lines_drawn;
        report.lines_last_frame = lines;
        report.lines_total += lines as u64;
        report.max_lines = report.max_lines.max(lines);
        report.min_lines = report.min_lines.min(lines);
        report.contained &= field.particles().iter().all(|p| bounds.contains(p.position));
    }
    info!(%report, "Headless run finished");
    Ok(report)
}
