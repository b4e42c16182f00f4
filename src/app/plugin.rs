// This file is part of Particle Burst.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::BurstConfig;
use crate::core::system::system_order::{BurstTickSet, DrawSyncSet, ViewportSet};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::burst::BurstPlugin;
use crate::interaction::session::AutoClosePlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::particles::ParticleVisualsPlugin;

/// Outcome of config loading, logged once the log subscriber exists.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

pub struct ParticleBurstPlugin;

impl Plugin for ParticleBurstPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BurstConfig>()
            .configure_sets(
                Update,
                (
                    ViewportSet,
                    BurstTickSet.after(ViewportSet),
                    DrawSyncSet.after(BurstTickSet),
                ),
            )
            .add_plugins((
                CameraPlugin,
                BurstPlugin,
                ParticleVisualsPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ))
            .add_systems(Startup, log_config_summary);
    }
}

fn log_config_summary(cfg: Res<BurstConfig>, report: Option<Res<ConfigLoadReport>>) {
    if let Some(report) = report {
        for e in &report.errors {
            warn!("CONFIG LOAD ISSUE: {e}");
        }
        if report.used.is_empty() {
            info!("No config layers found; using defaults");
        } else {
            info!(used = ?report.used, "Config layers loaded");
        }
    }
    for w in cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
    info!(?cfg.window, "Window config");
    info!(
        particles = cfg.pool.count,
        lifetime = cfg.burst.lifetime,
        delay = cfg.burst.delay,
        seed = ?cfg.seed,
        "Runtime summary"
    );
}
