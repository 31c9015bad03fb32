use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use rand::rngs::StdRng;
use rand::SeedableRng;

use particle_network::app::network::{configure_network_sets, initialize_field};
use particle_network::core::system::FieldLoopSet;
use particle_network::interaction::pointer::track_pointer;
use particle_network::interaction::resize::handle_window_resize;
use particle_network::{
    Bounds, FieldLoop, FieldSettings, NetworkConfig, NetworkField, ParticleField,
    RecordingSurface, RngSeed,
};

fn test_app(with_window: bool) -> App {
    let mut app = App::new();
    let mut cfg = NetworkConfig::default();
    cfg.particles.count = 16;
    app.add_plugins(MinimalPlugins)
        .add_event::<WindowResized>()
        .insert_resource(cfg)
        .insert_resource(RngSeed(21))
        .add_systems(Startup, initialize_field)
        .add_systems(Update, (handle_window_resize, track_pointer).chain());
    if with_window {
        let mut window = Window::default();
        window.resolution.set(800.0, 600.0);
        app.world_mut().spawn((window, PrimaryWindow));
    }
    app
}

fn primary_window(app: &mut App) -> Entity {
    let mut q = app
        .world_mut()
        .query_filtered::<Entity, With<PrimaryWindow>>();
    q.single(app.world()).expect("primary window")
}

#[test]
fn field_created_from_window_size() {
    let mut app = test_app(true);
    app.update();
    let field = app.world().resource::<NetworkField>();
    assert_eq!(field.len(), 16);
    assert_eq!(field.bounds().width, 800.0);
    assert_eq!(field.bounds().height, 600.0);
}

#[test]
fn no_window_leaves_field_inactive() {
    let mut app = test_app(false);
    app.update();
    app.update();
    assert!(app.world().get_resource::<NetworkField>().is_none());
}

#[test]
fn cursor_enters_and_leaves() {
    let mut app = test_app(true);
    app.update();
    let entity = primary_window(&mut app);

    app.world_mut()
        .get_mut::<Window>(entity)
        .unwrap()
        .set_cursor_position(Some(Vec2::new(120.0, 80.0)));
    app.update();
    let pointer = app.world().resource::<NetworkField>().pointer();
    assert_eq!(pointer.position(), Some(Vec2::new(120.0, 80.0)));

    app.world_mut()
        .get_mut::<Window>(entity)
        .unwrap()
        .set_cursor_position(None);
    app.update();
    assert!(!app.world().resource::<NetworkField>().pointer().is_present());
}

#[test]
fn resize_event_rescales_field() {
    let mut app = test_app(true);
    app.update();
    let entity = primary_window(&mut app);
    let before: Vec<Vec2> = app
        .world()
        .resource::<NetworkField>()
        .particles()
        .iter()
        .map(|p| p.position)
        .collect();

    app.world_mut()
        .get_mut::<Window>(entity)
        .unwrap()
        .resolution
        .set(400.0, 300.0);
    app.world_mut().send_event(WindowResized {
        window: entity,
        width: 400.0,
        height: 300.0,
    });
    app.update();

    let field = app.world().resource::<NetworkField>();
    assert_eq!(field.bounds().width, 400.0);
    assert_eq!(field.bounds().height, 300.0);
    for (old, p) in before.iter().zip(field.particles()) {
        assert!((p.position.x - old.x * 0.5).abs() < 1e-3);
        assert!((p.position.y - old.y * 0.5).abs() < 1e-3);
    }
}

fn positions(app: &App) -> Vec<Vec2> {
    app.world()
        .resource::<NetworkField>()
        .particles()
        .iter()
        .map(|p| p.position)
        .collect()
}

fn tick_recording(mut field: ResMut<NetworkField>, mut surface: Local<RecordingSurface>) {
    field.tick(&mut *surface);
}

fn redraw_recording(field: Res<NetworkField>, mut surface: Local<RecordingSurface>) {
    field.render(&mut *surface);
}

#[test]
fn stopped_loop_freezes_field_until_resumed() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    configure_network_sets(&mut app);
    let field = ParticleField::initialize_with_rng(
        Some(Bounds::new(400.0, 300.0)),
        FieldSettings {
            count: 12,
            ..FieldSettings::default()
        },
        StdRng::seed_from_u64(17),
    )
    .unwrap();
    app.insert_resource(NetworkField(field)).add_systems(
        Update,
        (
            tick_recording.in_set(FieldLoopSet::Running),
            redraw_recording.in_set(FieldLoopSet::Stopped),
        ),
    );

    app.update();
    let moving = positions(&app);
    app.update();
    assert_ne!(positions(&app), moving);

    app.world_mut().resource_mut::<FieldLoop>().stop();
    let frozen = positions(&app);
    for _ in 0..5 {
        app.update();
        assert_eq!(positions(&app), frozen);
    }

    app.world_mut().resource_mut::<FieldLoop>().resume();
    app.update();
    assert_ne!(positions(&app), frozen);
}
