#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::stats::{DebugState, DebugStats};

#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!("BURST frame={} t={:.3}s fps={:.1} ft_ms={:.1} phase={:?} bursts={} resumes={} visible={}/{}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.phase,
            stats.bursts_completed,
            stats.resumes,
            stats.visible_particles,
            stats.pool_size);
    }
}
