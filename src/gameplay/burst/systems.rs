use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::animator::{BurstAnimator, BurstPhase, TickOutcome};
use crate::core::config::BurstConfig;
use crate::core::viewport::ViewportSize;

/// RNG stream owned by the burst cycle (pool colors, velocities, origins).
#[derive(Resource)]
pub struct BurstRng(pub StdRng);

impl BurstRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Emitted on the tick a phase transition happens.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum BurstPhaseChanged {
    Expired { origin: Vec2 },
    Resumed,
}

impl BurstPhaseChanged {
    pub fn phase(&self) -> BurstPhase {
        match self {
            BurstPhaseChanged::Expired { .. } => BurstPhase::Waiting,
            BurstPhaseChanged::Resumed => BurstPhase::Animating,
        }
    }
}

/// System: create the RNG (if not provided) and the particle pool.
pub fn burst_init(
    mut commands: Commands,
    cfg: Res<BurstConfig>,
    rng: Option<ResMut<BurstRng>>,
    existing: Option<Res<BurstAnimator>>,
) {
    if existing.is_some() {
        return;
    }
    let animator = match rng {
        Some(mut rng) => BurstAnimator::new(&mut rng.0, &cfg),
        None => {
            let mut rng = BurstRng::from_seed(cfg.seed);
            let animator = BurstAnimator::new(&mut rng.0, &cfg);
            commands.insert_resource(rng);
            animator
        }
    };
    info!(
        particles = animator.len(),
        lifetime = cfg.burst.lifetime,
        delay = cfg.burst.delay,
        seeded = cfg.seed.is_some(),
        "Burst pool created"
    );
    commands.insert_resource(animator);
}

/// System: advance the cycle by the measured frame delta.
pub fn burst_tick(
    time: Res<Time>,
    viewport: Res<ViewportSize>,
    animator: Option<ResMut<BurstAnimator>>,
    rng: Option<ResMut<BurstRng>>,
    mut ev_phase: EventWriter<BurstPhaseChanged>,
) {
    let (Some(mut animator), Some(mut rng)) = (animator, rng) else {
        return;
    };
    match animator.tick(time.delta_secs(), *viewport, &mut rng.0) {
        TickOutcome::Expired { origin } => {
            debug!(
                x = origin.x,
                y = origin.y,
                bursts = animator.bursts_completed(),
                "Burst expired; next origin primed"
            );
            ev_phase.write(BurstPhaseChanged::Expired { origin });
        }
        TickOutcome::Resumed => {
            debug!("Burst wait elapsed; animating");
            ev_phase.write(BurstPhaseChanged::Resumed);
        }
        TickOutcome::Animated { .. } | TickOutcome::Waiting { .. } => {}
    }
}
