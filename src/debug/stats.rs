#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::ParticleOpacity;
#[cfg(feature = "debug")]
use crate::gameplay::burst::{BurstAnimator, BurstPhase, BurstPhaseChanged};

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub phase: BurstPhase,
    pub bursts_completed: u64,
    pub resumes: u64,
    pub visible_particles: usize,
    pub pool_size: usize,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    mut ev_phase: EventReader<BurstPhaseChanged>,
    animator: Option<Res<BurstAnimator>>,
    q_particles: Query<&ParticleOpacity>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    for ev in ev_phase.read() {
        if matches!(ev, BurstPhaseChanged::Resumed) {
            stats.resumes += 1;
        }
    }
    if let Some(animator) = animator {
        stats.phase = animator.phase();
        stats.bursts_completed = animator.bursts_completed();
        stats.pool_size = animator.len();
    }
    stats.visible_particles = q_particles.iter().filter(|o| o.0 > 0.0).count();
}
