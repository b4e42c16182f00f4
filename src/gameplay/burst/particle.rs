use bevy::prelude::*;

/// Opacity curve over normalized progress: 0 at t=0, 1 at t=0.5, back to 0 at t=1.
/// Outside [0,1) the particle is invisible.
#[inline]
pub fn triangle_opacity(t: f32) -> f32 {
    if !(0.0..1.0).contains(&t) {
        return 0.0;
    }
    1.0 - (2.0 * t - 1.0).abs()
}

/// One pool slot. Color is fixed for the slot's lifetime; the rest is rewritten every burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub base_position: Vec2,
    pub velocity: Vec2,
    pub elapsed: f32,
    pub lifetime: f32,
    pub color: Srgba,
    /// Last computed position; frozen once the particle expires.
    pub position: Vec2,
}

impl Particle {
    pub fn new(origin: Vec2, velocity: Vec2, lifetime: f32, color: Srgba) -> Self {
        Self {
            base_position: origin,
            velocity,
            elapsed: 0.0,
            lifetime,
            color,
            position: origin,
        }
    }

    /// Normalized progress `elapsed / lifetime`; a non-positive lifetime counts as expired.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 1.0;
        }
        self.elapsed / self.lifetime
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.progress() >= 1.0
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        triangle_opacity(self.progress())
    }

    /// Advance by `dt` seconds. Returns true while the particle is still alive.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        let t = self.progress();
        if t < 1.0 {
            self.position = self.base_position + self.velocity * t;
            true
        } else {
            false
        }
    }

    /// Prime for a new burst from `origin`.
    pub fn restart(&mut self, origin: Vec2, velocity: Vec2) {
        self.base_position = origin;
        self.position = origin;
        self.velocity = velocity;
        self.elapsed = 0.0;
    }
}
