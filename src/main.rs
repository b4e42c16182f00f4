use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use particle_burst::core::config::DEFAULT_CONFIG_LAYERS;
use particle_burst::{BurstConfig, ConfigLoadReport, ParticleBurstPlugin};

#[derive(Parser, Debug)]
#[command(about = "Looping 2D particle bursts", version, author)]
struct Args {
    /// RON config layer(s), merged in order. Replaces the default `assets/config` layers.
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Fixed RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds (0 = run indefinitely).
    #[arg(long, value_name = "SECS")]
    auto_close: Option<f32>,
}

fn load_config(args: &Args) -> anyhow::Result<(BurstConfig, ConfigLoadReport)> {
    if args.config.is_empty() {
        let (cfg, used, errors) = BurstConfig::load_layered(DEFAULT_CONFIG_LAYERS);
        return Ok((cfg, ConfigLoadReport { used, errors }));
    }
    // Explicit layers must all exist; a typo should not silently fall back to defaults.
    for path in &args.config {
        std::fs::metadata(path)
            .with_context(|| format!("config layer {} not readable", path.display()))?;
    }
    let (cfg, used, errors) = BurstConfig::load_layered(&args.config);
    if let Some(first) = errors.first() {
        anyhow::bail!("config load failed: {first}");
    }
    Ok((cfg, ConfigLoadReport { used, errors }))
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let args = Args::parse();
    let (mut cfg, report) = load_config(&args)?;
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    let window = cfg.window.clone();
    App::new()
        .insert_resource(cfg)
        .insert_resource(report)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title,
                resolution: (window.width, window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ParticleBurstPlugin)
        .run();
    Ok(())
}
