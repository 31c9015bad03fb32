// Automatically exits the app after a configured number of seconds (if > 0)
// Reads `NetworkConfig.window.autoClose` (RON key) / `WindowConfig::auto_close`.
// 0.0 (default) => disabled.

use crate::core::config::NetworkConfig;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<NetworkConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(mut t) = timer {
        t.tick(time.delta());
        if t.just_finished() {
            info!("AutoClose: timer finished, requesting app exit");
            ev_exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<NetworkConfig>();
        app.add_plugins(AutoClosePlugin);
        app.update();
        assert!(app.world().get_resource::<AutoCloseTimer>().is_none());
    }

    #[test]
    fn timer_installed_when_configured() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut cfg = NetworkConfig::default();
        cfg.window.auto_close = 2.5;
        app.insert_resource(cfg);
        app.add_plugins(AutoClosePlugin);
        app.update();
        let timer = app.world().resource::<AutoCloseTimer>();
        assert!((timer.duration().as_secs_f32() - 2.5).abs() < 1e-6);
    }
}
