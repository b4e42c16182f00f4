use bevy::prelude::*;
use bevy::render::camera::{CameraProjection, ScalingMode};
use bevy::window::{PrimaryWindow, WindowResized};

use crate::core::components::BurstCamera;
use crate::core::system::system_order::ViewportSet;
use crate::core::viewport::ViewportSize;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        // No-op when WindowPlugin already registered it; lets the plugin run headless.
        app.add_event::<WindowResized>()
            .init_resource::<ViewportSize>()
            .add_systems(Startup, (sync_viewport_to_window, setup_camera).chain())
            .add_systems(Update, handle_viewport_resize.in_set(ViewportSet));
    }
}

/// Orthographic projection whose visible area is exactly the symmetric viewport bounds.
pub fn projection_for(viewport: ViewportSize) -> OrthographicProjection {
    let mut ortho = OrthographicProjection {
        scaling_mode: ScalingMode::Fixed {
            width: viewport.width,
            height: viewport.height,
        },
        ..OrthographicProjection::default_2d()
    };
    ortho.update(viewport.width, viewport.height);
    ortho
}

fn sync_viewport_to_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    if let Ok(window) = windows.single() {
        let size = ViewportSize::new(window.width(), window.height());
        viewport.set_if_neq(size);
    }
}

fn setup_camera(mut commands: Commands, viewport: Res<ViewportSize>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(projection_for(*viewport)),
        BurstCamera,
    ));
}

/// System: track the host surface size. Only the latest resize of a frame matters.
pub fn handle_viewport_resize(
    mut ev_resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut q_projection: Query<&mut Projection, With<BurstCamera>>,
) {
    let Some(last) = ev_resized.read().last() else {
        return;
    };
    let size = ViewportSize::new(last.width, last.height);
    if *viewport == size {
        return;
    }
    *viewport = size;
    for mut projection in q_projection.iter_mut() {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            *ortho = OrthographicProjection {
                near: ortho.near,
                far: ortho.far,
                ..projection_for(size)
            };
        }
    }
    debug!(width = size.width, height = size.height, "Viewport resized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_area_matches_viewport_bounds() {
        let v = ViewportSize::new(1024.0, 512.0);
        let ortho = projection_for(v);
        assert_eq!(ortho.area, v.bounds());
        assert_eq!(ortho.area.min, Vec2::new(-512.0, -256.0));
    }

    #[test]
    fn plugin_spawns_single_camera() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CameraPlugin);
        app.update();

        let world = app.world_mut();
        let mut q = world.query_filtered::<&Projection, With<BurstCamera>>();
        assert_eq!(q.iter(world).count(), 1, "expected exactly one BurstCamera");
        let projection = q.iter(world).next().expect("camera");
        let Projection::Orthographic(ortho) = projection else {
            panic!("expected orthographic projection");
        };
        assert_eq!(ortho.area, ViewportSize::new(1280.0, 720.0).bounds());
    }
}
