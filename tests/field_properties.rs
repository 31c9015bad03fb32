use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use particle_network::rendering::DrawCommand;
use particle_network::{Bounds, FieldError, FieldSettings, Particle, ParticleField, RecordingSurface};

fn field(count: usize, w: f32, h: f32, seed: u64) -> ParticleField {
    let settings = FieldSettings {
        count,
        ..FieldSettings::default()
    };
    ParticleField::initialize_with_rng(Some(Bounds::new(w, h)), settings, StdRng::seed_from_u64(seed))
        .expect("valid bounds")
}

#[test]
fn every_frame_evaluates_each_pair_once_and_draws_every_particle() {
    let mut f = field(40, 640.0, 480.0, 3);
    let mut surface = RecordingSurface::default();
    for _ in 0..5 {
        let stats = f.tick(&mut surface);
        assert_eq!(stats.connections.pairs_evaluated, 40 * 39 / 2);
        assert_eq!(stats.particles_rendered, 40);
        assert_eq!(surface.circles().count(), 40);
        assert_eq!(surface.lines().count(), stats.connections.lines_drawn);
    }
    assert_eq!(surface.clear_count(), 5);
}

#[test]
fn frame_draws_lines_before_particles() {
    let mut f = field(25, 300.0, 200.0, 11);
    let mut surface = RecordingSurface::default();
    f.tick(&mut surface);
    let cmds = surface.commands();
    let first_circle = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Circle { .. }))
        .expect("particles drawn");
    assert!(cmds[first_circle..]
        .iter()
        .all(|c| matches!(c, DrawCommand::Circle { .. })));
}

#[test]
fn particles_stay_inside_through_resizes_and_pointer_sweeps() {
    let mut f = field(80, 800.0, 600.0, 5);
    let mut surface = RecordingSurface::default();
    let sizes = [(800.0, 600.0), (400.0, 900.0), (1200.0, 300.0), (50.0, 50.0)];
    for (i, (w, h)) in sizes.into_iter().enumerate() {
        assert!(f.resize(Bounds::new(w, h)));
        for frame in 0..200 {
            let t = frame as f32 / 200.0;
            if i % 2 == 0 {
                f.on_pointer_move(Vec2::new(w * t, h * (1.0 - t)));
            } else {
                f.on_pointer_leave();
            }
            f.tick(&mut surface);
            let b = f.bounds();
            for p in f.particles() {
                assert!(b.contains(p.position), "{:?} escaped {:?}", p.position, b);
                assert!(p.velocity.is_finite());
            }
        }
    }
}

#[test]
fn resize_preserves_relative_placement() {
    let settings = FieldSettings::default();
    let particles = vec![
        Particle::new(Vec2::new(100.0, 50.0), Vec2::ZERO, settings.radius),
        Particle::new(Vec2::new(300.0, 150.0), Vec2::ZERO, settings.radius),
    ];
    let mut f = ParticleField::from_particles(
        Bounds::new(400.0, 200.0),
        settings,
        particles,
        StdRng::seed_from_u64(0),
    )
    .unwrap();
    assert!(f.resize(Bounds::new(800.0, 100.0)));
    assert_eq!(f.particles()[0].position, Vec2::new(200.0, 25.0));
    assert_eq!(f.particles()[1].position, Vec2::new(600.0, 75.0));
    assert_eq!(f.len(), 2);

    assert!(!f.resize(Bounds::new(0.0, 100.0)));
    assert_eq!(f.bounds(), Bounds::new(800.0, 100.0));
}

#[test]
fn close_pair_is_connected_and_far_pair_is_not() {
    let settings = FieldSettings::default();
    let particles = vec![
        Particle::new(Vec2::new(10.0, 10.0), Vec2::ZERO, settings.radius),
        Particle::new(Vec2::new(60.0, 10.0), Vec2::ZERO, settings.radius),
        Particle::new(Vec2::new(390.0, 190.0), Vec2::ZERO, settings.radius),
    ];
    let f = ParticleField::from_particles(
        Bounds::new(400.0, 200.0),
        settings,
        particles,
        StdRng::seed_from_u64(0),
    )
    .unwrap();
    let mut surface = RecordingSurface::default();
    let stats = f.draw_connections(&mut surface);
    assert_eq!(stats.pairs_evaluated, 3);
    assert_eq!(stats.lines_drawn, 1);
    let (a, b, _) = surface.lines().next().unwrap();
    assert_eq!((a, b), (Vec2::new(10.0, 10.0), Vec2::new(60.0, 10.0)));
}

#[test]
fn changing_count_at_runtime_is_rejected_but_other_settings_apply() {
    let mut f = field(10, 200.0, 200.0, 9);
    let next = FieldSettings {
        count: 20,
        radius: 6.0,
        ..FieldSettings::default()
    };
    let err = f.apply_settings(next).unwrap_err();
    assert_eq!(
        err,
        FieldError::FixedCardinality {
            current: 10,
            requested: 20
        }
    );
    assert_eq!(f.len(), 10);
    assert!(f.particles().iter().all(|p| p.radius == 6.0));
}
