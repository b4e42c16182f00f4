pub mod animator;
pub mod particle;
pub mod systems;
pub mod velocity;

pub use animator::{BurstAnimator, BurstPhase, ParticleDraw, TickOutcome};
pub use particle::{triangle_opacity, Particle};
pub use systems::{burst_init, burst_tick, BurstPhaseChanged, BurstRng};
pub use velocity::sample_velocity;

use bevy::prelude::*;

use crate::core::config::BurstConfig;
use crate::core::system::system_order::BurstTickSet;
use crate::core::viewport::ViewportSize;

pub struct BurstPlugin;

impl Plugin for BurstPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BurstConfig>()
            .init_resource::<ViewportSize>()
            .add_event::<BurstPhaseChanged>()
            .add_systems(Startup, burst_init)
            .add_systems(Update, burst_tick.in_set(BurstTickSet));
    }
}
