use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::config::SpawnRange;

/// Outward velocity: uniform direction, magnitude `uniform(speed) * scale`.
pub fn sample_velocity<R: Rng + ?Sized>(rng: &mut R, speed: &SpawnRange<f32>, scale: f32) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    let factor = if speed.max > speed.min {
        rng.gen_range(speed.min..speed.max)
    } else {
        speed.min
    };
    Vec2::from_angle(angle) * factor * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const SPEED: SpawnRange<f32> = SpawnRange { min: 0.5, max: 4.0 };

    #[test]
    fn magnitude_within_scaled_speed_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let v = sample_velocity(&mut rng, &SPEED, 220.0);
            let m = v.length();
            assert!(
                (110.0 - 1e-2..=880.0 + 1e-2).contains(&m),
                "magnitude {m} outside [110, 880]"
            );
        }
    }

    #[test]
    fn direction_roughly_uniform() {
        const BINS: usize = 8;
        const SAMPLES: usize = 10_000;
        let mut rng = StdRng::seed_from_u64(12);
        let mut hist = [0usize; BINS];
        for _ in 0..SAMPLES {
            let v = sample_velocity(&mut rng, &SPEED, 220.0);
            let angle = v.y.atan2(v.x).rem_euclid(TAU);
            let bin = ((angle / TAU) * BINS as f32) as usize;
            hist[bin.min(BINS - 1)] += 1;
        }
        let expected = SAMPLES / BINS;
        for (i, count) in hist.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "bin {i} has {count}, expected about {expected}"
            );
        }
    }

    #[test]
    fn collapsed_range_uses_min() {
        let mut rng = StdRng::seed_from_u64(13);
        let v = sample_velocity(&mut rng, &SpawnRange { min: 1.0, max: 1.0 }, 100.0);
        assert!((v.length() - 100.0).abs() < 1e-3);
    }
}
