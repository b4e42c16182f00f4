//! Smoke-run session limit: exit once `window.autoClose` seconds of app time have passed.

use bevy::prelude::*;

use crate::core::config::BurstConfig;
use crate::gameplay::burst::BurstAnimator;

/// Elapsed-time deadline for the session. Removed once the exit is requested.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SessionDeadline {
    pub exit_at_secs: f32,
}

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline)
            .add_systems(Update, close_after_deadline);
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Res<BurstConfig>, time: Res<Time>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "Session will close after {secs}s");
        commands.insert_resource(SessionDeadline {
            exit_at_secs: time.elapsed_secs() + secs,
        });
    }
}

fn close_after_deadline(
    mut commands: Commands,
    time: Res<Time>,
    deadline: Option<Res<SessionDeadline>>,
    animator: Option<Res<BurstAnimator>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(deadline) = deadline else { return };
    if time.elapsed_secs() < deadline.exit_at_secs {
        return;
    }
    let bursts = animator.map_or(0, |a| a.bursts_completed());
    info!(bursts, "Session deadline reached, exiting");
    ev_exit.write(AppExit::Success);
    commands.remove_resource::<SessionDeadline>();
}
