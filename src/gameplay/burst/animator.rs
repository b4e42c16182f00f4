//! Burst animator: the particle pool plus the two-phase animate/wait cycle.
//!
//! Pure data, no ECS access: the tick takes the frame delta, the current viewport and an RNG
//! explicitly, so the whole cycle can be driven from unit tests. Bevy systems in
//! [`super::systems`] own the resource and forward `Time` / `ViewportSize` into it.

use bevy::prelude::*;
use rand::Rng;

use super::particle::Particle;
use super::velocity::sample_velocity;
use crate::core::config::{BurstConfig, SpawnRange};
use crate::core::viewport::ViewportSize;
use crate::rendering::palette::sample_particle_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BurstPhase {
    /// Particles moving and fading.
    #[default]
    Animating,
    /// Pool primed at the next origin, pausing before it is released.
    Waiting,
}

/// What a single tick did. Transitions are reported on the tick they happen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Animated { live: usize },
    /// Every particle expired; the pool was re-primed at `origin` and the wait started.
    Expired { origin: Vec2 },
    Waiting { remaining: f32 },
    /// The wait elapsed; particles start moving on the next tick.
    Resumed,
}

/// Per-slot draw data read by the visual sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDraw {
    pub slot: usize,
    pub position: Vec2,
    pub opacity: f32,
    pub color: Srgba,
}

#[derive(Resource, Debug, Clone)]
pub struct BurstAnimator {
    particles: Vec<Particle>,
    phase: BurstPhase,
    wait_timer: f32,
    delay: f32,
    origin: Vec2,
    speed: SpawnRange<f32>,
    speed_scale: f32,
    bursts_completed: u64,
}

impl BurstAnimator {
    /// Build the pool: one fixed color per slot, velocities for the first burst,
    /// every particle transparent at the center of the field.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, cfg: &BurstConfig) -> Self {
        let timing = &cfg.burst;
        let particles = (0..cfg.pool.count)
            .map(|_| {
                let color = sample_particle_color(rng, &cfg.palette);
                let velocity = sample_velocity(rng, &timing.speed, timing.speed_scale);
                Particle::new(Vec2::ZERO, velocity, timing.lifetime, color)
            })
            .collect();
        Self {
            particles,
            phase: BurstPhase::Animating,
            wait_timer: 0.0,
            delay: timing.delay.max(0.0),
            origin: Vec2::ZERO,
            speed: timing.speed,
            speed_scale: timing.speed_scale,
            bursts_completed: 0,
        }
    }

    pub fn phase(&self) -> BurstPhase {
        self.phase
    }

    pub fn wait_timer(&self) -> f32 {
        self.wait_timer
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Origin of the current (or primed) burst.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bursts_completed(&self) -> u64 {
        self.bursts_completed
    }

    pub fn all_expired(&self) -> bool {
        self.particles.iter().all(Particle::is_expired)
    }

    pub fn draws(&self) -> impl Iterator<Item = ParticleDraw> + '_ {
        self.particles
            .iter()
            .enumerate()
            .map(|(slot, p)| ParticleDraw {
                slot,
                position: p.position,
                opacity: p.opacity(),
                color: p.color,
            })
    }

    pub fn draw(&self, slot: usize) -> Option<ParticleDraw> {
        self.particles.get(slot).map(|p| ParticleDraw {
            slot,
            position: p.position,
            opacity: p.opacity(),
            color: p.color,
        })
    }

    /// Advance the cycle by `dt` seconds of measured frame time.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        viewport: ViewportSize,
        rng: &mut R,
    ) -> TickOutcome {
        let dt = dt.max(0.0);
        match self.phase {
            BurstPhase::Waiting => {
                self.wait_timer += dt;
                if self.wait_timer >= self.delay {
                    self.phase = BurstPhase::Animating;
                    self.wait_timer = 0.0;
                    TickOutcome::Resumed
                } else {
                    TickOutcome::Waiting {
                        remaining: self.delay - self.wait_timer,
                    }
                }
            }
            BurstPhase::Animating => {
                let live = self
                    .particles
                    .iter_mut()
                    .map(|p| p.advance(dt))
                    .filter(|alive| *alive)
                    .count();
                if live > 0 {
                    return TickOutcome::Animated { live };
                }
                let origin = self.prime_next_burst(viewport, rng);
                self.phase = BurstPhase::Waiting;
                self.wait_timer = 0.0;
                self.bursts_completed += 1;
                TickOutcome::Expired { origin }
            }
        }
    }

    /// Pick a fresh origin inside the viewport and reset every slot to it.
    fn prime_next_burst<R: Rng + ?Sized>(&mut self, viewport: ViewportSize, rng: &mut R) -> Vec2 {
        let origin = viewport.random_point(rng);
        for p in &mut self.particles {
            let velocity = sample_velocity(rng, &self.speed, self.speed_scale);
            p.restart(origin, velocity);
        }
        self.origin = origin;
        origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const DT: f32 = 0.016;

    fn viewport() -> ViewportSize {
        ViewportSize::new(800.0, 600.0)
    }

    fn fresh(seed: u64) -> (BurstAnimator, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let animator = BurstAnimator::new(&mut rng, &BurstConfig::default());
        (animator, rng)
    }

    #[test]
    fn pool_starts_animating_at_center() {
        let (a, _) = fresh(1);
        assert_eq!(a.len(), 100);
        assert_eq!(a.phase(), BurstPhase::Animating);
        assert_eq!(a.origin(), Vec2::ZERO);
        for d in a.draws() {
            assert_eq!(d.position, Vec2::ZERO);
            assert_eq!(d.opacity, 0.0);
        }
        assert!(a.particles().iter().all(|p| p.elapsed == 0.0));
    }

    #[test]
    fn animating_tick_advances_every_particle() {
        let (mut a, mut rng) = fresh(2);
        let out = a.tick(1.5, viewport(), &mut rng);
        assert_eq!(out, TickOutcome::Animated { live: 100 });
        for p in a.particles() {
            assert!((p.elapsed - 1.5).abs() < 1e-6);
            assert!((p.position - p.velocity * 0.5).length() < 1e-3);
            assert!((p.opacity() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn full_expiry_primes_next_burst_inside_viewport() {
        let (mut a, mut rng) = fresh(3);
        let colors: Vec<Srgba> = a.particles().iter().map(|p| p.color).collect();
        let velocities: Vec<Vec2> = a.particles().iter().map(|p| p.velocity).collect();
        assert!(matches!(
            a.tick(2.99, viewport(), &mut rng),
            TickOutcome::Animated { .. }
        ));
        let out = a.tick(0.02, viewport(), &mut rng);
        let TickOutcome::Expired { origin } = out else {
            panic!("expected expiry, got {out:?}");
        };
        assert_eq!(a.phase(), BurstPhase::Waiting);
        assert_eq!(a.wait_timer(), 0.0);
        assert_eq!(a.origin(), origin);
        assert!(viewport().contains(origin));
        assert_eq!(a.bursts_completed(), 1);
        for (i, p) in a.particles().iter().enumerate() {
            assert_eq!(p.elapsed, 0.0);
            assert_eq!(p.base_position, origin);
            assert_eq!(p.position, origin);
            assert_eq!(p.opacity(), 0.0);
            assert_eq!(p.color, colors[i], "color never re-sampled");
        }
        let changed = a
            .particles()
            .iter()
            .zip(&velocities)
            .filter(|(p, v)| p.velocity != **v)
            .count();
        assert!(changed > 90, "velocities should be resampled, only {changed} changed");
    }

    #[test]
    fn waiting_counts_down_then_resumes() {
        let (mut a, mut rng) = fresh(4);
        assert_eq!(a.delay(), 1.5);
        a.tick(3.0, viewport(), &mut rng);
        assert_eq!(a.phase(), BurstPhase::Waiting);
        match a.tick(1.0, viewport(), &mut rng) {
            TickOutcome::Waiting { remaining } => assert!((remaining - 0.5).abs() < 1e-5),
            other => panic!("expected waiting, got {other:?}"),
        }
        assert_eq!(a.tick(0.5, viewport(), &mut rng), TickOutcome::Resumed);
        assert_eq!(a.phase(), BurstPhase::Animating);
        assert_eq!(a.wait_timer(), 0.0);
        assert!(a.particles().iter().all(|p| p.elapsed == 0.0));
        // next tick moves the primed pool away from the new origin
        let origin = a.origin();
        a.tick(0.5, viewport(), &mut rng);
        assert!(a.particles().iter().all(|p| p.position != origin));
    }

    #[test]
    fn waiting_does_not_touch_particles() {
        let (mut a, mut rng) = fresh(5);
        a.tick(3.0, viewport(), &mut rng);
        let before = a.particles().to_vec();
        a.tick(0.7, viewport(), &mut rng);
        assert_eq!(a.particles(), before.as_slice());
    }

    #[test]
    fn origin_follows_current_viewport() {
        let (mut a, mut rng) = fresh(6);
        let small = ViewportSize::new(10.0, 4.0);
        for _ in 0..20 {
            a.tick(3.0, small, &mut rng);
            assert!(small.contains(a.origin()), "origin {:?}", a.origin());
            a.tick(1.5, small, &mut rng);
        }
        assert_eq!(a.bursts_completed(), 20);
    }

    #[test]
    fn fixed_step_cycle_end_to_end() {
        let (mut a, mut rng) = fresh(7);
        // 187 * 16ms = 2.992s: still fading
        for _ in 0..187 {
            assert!(matches!(a.tick(DT, viewport(), &mut rng), TickOutcome::Animated { .. }));
        }
        assert_eq!(a.phase(), BurstPhase::Animating);
        // 188 * 16ms = 3.008s: the whole pool expires on the same tick
        assert!(matches!(a.tick(DT, viewport(), &mut rng), TickOutcome::Expired { .. }));
        assert_eq!(a.phase(), BurstPhase::Waiting);
        assert!(a.draws().all(|d| d.opacity == 0.0));

        // 93 * 16ms = 1.488s of waiting
        for _ in 0..93 {
            assert!(matches!(a.tick(DT, viewport(), &mut rng), TickOutcome::Waiting { .. }));
        }
        assert_eq!(a.tick(DT, viewport(), &mut rng), TickOutcome::Resumed);
        assert_eq!(a.phase(), BurstPhase::Animating);
        assert!(a.particles().iter().all(|p| p.elapsed == 0.0));
    }

    #[test]
    fn same_seed_same_cycle() {
        let run = |seed| {
            let (mut a, mut rng) = fresh(seed);
            a.tick(3.0, viewport(), &mut rng);
            (a.origin(), a.particles()[0].velocity, a.particles()[0].color)
        };
        assert_eq!(run(99), run(99));
        assert_ne!(run(99).0, run(100).0);
    }

    #[test]
    fn empty_pool_cycles_without_panicking() {
        let mut cfg = BurstConfig::default();
        cfg.pool.count = 0;
        let mut rng = StdRng::seed_from_u64(8);
        let mut a = BurstAnimator::new(&mut rng, &cfg);
        assert!(a.is_empty());
        assert!(matches!(a.tick(DT, viewport(), &mut rng), TickOutcome::Expired { .. }));
        assert_eq!(a.draws().count(), 0);
    }
}
