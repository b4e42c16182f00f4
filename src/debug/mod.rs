//! Debug module: feature gated runtime stats/logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::{DebugState, DebugStats};

#[cfg(feature = "debug")]
use crate::core::system::system_order::DrawSyncSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(DrawSyncSet),
            );
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;
    use crate::core::config::BurstConfig;
    use crate::gameplay::burst::{BurstAnimator, BurstPhase, BurstPlugin};
    use crate::rendering::particles::ParticleVisualsPlugin;

    #[test]
    fn stats_track_pool() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(BurstConfig {
            seed: Some(3),
            ..Default::default()
        });
        app.add_plugins((BurstPlugin, ParticleVisualsPlugin, DebugPlugin));
        app.update();
        app.update();

        let stats = app.world().resource::<DebugStats>();
        assert_eq!(stats.pool_size, 100);
        assert_eq!(stats.phase, BurstPhase::Animating);
        assert_eq!(stats.bursts_completed, 0);
        assert!(app.world().resource::<DebugState>().frame_counter >= 2);
    }

    #[test]
    fn stats_follow_a_full_cycle() {
        use bevy::time::TimeUpdateStrategy;
        use std::time::Duration;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));
        app.insert_resource(BurstConfig {
            seed: Some(4),
            ..Default::default()
        });
        app.add_plugins((BurstPlugin, ParticleVisualsPlugin, DebugPlugin));

        let mut saw_waiting = false;
        for _ in 0..400 {
            app.update();
            let animator_phase = app.world().resource::<BurstAnimator>().phase();
            let stats = app.world().resource::<DebugStats>();
            assert_eq!(stats.phase, animator_phase);
            if animator_phase == BurstPhase::Waiting {
                saw_waiting = true;
                assert_eq!(stats.visible_particles, 0);
            }
            if saw_waiting && animator_phase == BurstPhase::Animating {
                break;
            }
        }
        let stats = app.world().resource::<DebugStats>();
        assert!(saw_waiting);
        assert_eq!(stats.phase, BurstPhase::Animating);
        assert_eq!(stats.bursts_completed, 1);
        assert_eq!(stats.resumes, 1);
    }
}
