use bevy::prelude::*;
use rand::Rng;

use crate::core::config::BurstConfig;

/// Logical size of the drawing surface in world units (1 unit = 1 logical pixel).
/// The visible field is symmetric around the origin.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Symmetric orthographic bounds `[-w/2, w/2] x [-h/2, h/2]`.
    pub fn bounds(&self) -> Rect {
        let half = self.half_extents();
        Rect::from_corners(-half, half)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let half = self.half_extents();
        p.x.abs() <= half.x && p.y.abs() <= half.y
    }

    /// Uniform point inside the bounds (edges included, zero-sized axes give 0).
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let half = self.half_extents().abs();
        Vec2::new(
            rng.gen_range(-half.x..=half.x),
            rng.gen_range(-half.y..=half.y),
        )
    }
}

/// Until the window reports its size, fall back to the configured window dimensions.
impl FromWorld for ViewportSize {
    fn from_world(world: &mut World) -> Self {
        let window = world
            .get_resource::<BurstConfig>()
            .map(|cfg| cfg.window.clone())
            .unwrap_or_default();
        Self::new(window.width, window.height)
    }
}
