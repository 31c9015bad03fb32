use std::path::PathBuf;

use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;

use particle_network::interaction::session::config_hot_reload::ConfigReloadSettings;
use particle_network::{
    run_headless, ConfigLoadReport, NetworkConfig, ParticleNetworkPlugin, RngSeed,
};

#[derive(Parser, Debug)]
#[command(name = "particle_network", about = "Animated particle network that reacts to the pointer")]
struct Args {
    /// Config layers, later layers override earlier ones.
    #[arg(long = "config", value_name = "PATH", num_args = 1.., default_values = [
        "assets/config/network.ron",
        "assets/config/network.local.ron",
    ])]
    config: Vec<PathBuf>,

    /// Run without a window for the given number of frames and print a summary.
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u32>,

    /// Seed for particle placement and jitter.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (cfg, used, errors) = NetworkConfig::load_layered(&args.config);

    if let Some(frames) = args.headless {
        for e in &errors {
            eprintln!("CONFIG LOAD ISSUE: {e}");
        }
        for w in cfg.validate() {
            eprintln!("CONFIG WARNING: {w}");
        }
        let report = run_headless(&cfg, frames, args.seed)?;
        println!("{report}");
        return Ok(());
    }

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(ConfigLoadReport { used, errors })
        .insert_resource(ConfigReloadSettings {
            paths: args.config,
            ..default()
        })
        .insert_resource(ClearColor(cfg.background_color()))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ParticleNetworkPlugin);
    if let Some(seed) = args.seed {
        app.insert_resource(RngSeed(seed));
    }
    app.run();
    Ok(())
}
