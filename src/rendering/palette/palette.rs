//! Particle slot colors: a small base palette with per-slot HSL jitter and brightness shading.
//! Colors are sampled once when the pool is created and never re-sampled.

use bevy::prelude::*;
use rand::Rng;

use crate::core::config::PaletteConfig;

pub const BASE_COLORS: [Srgba; 3] = [
    Srgba::rgb(1.0, 0.0, 0.0), // red
    Srgba::rgb(0.0, 0.0, 1.0), // blue
    Srgba::rgb(1.0, 1.0, 0.0), // yellow
];

#[inline]
pub fn color_for_index(i: usize) -> Srgba {
    BASE_COLORS[i % BASE_COLORS.len()]
}

/// Shift a hue given as a fraction of a turn, wrapping into [0,1).
#[inline]
pub fn jitter_hue(hue: f32, shift: f32) -> f32 {
    let h = (hue + shift).rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}

#[inline]
pub fn jitter_saturation(saturation: f32, shift: f32) -> f32 {
    (saturation + shift).clamp(0.0, 1.0)
}

/// Apply a hue/saturation shift in HSL space (lightness kept), then scale RGB by `brightness`.
pub fn jittered_color(base: Srgba, hue_shift: f32, saturation_shift: f32, brightness: f32) -> Srgba {
    let mut hsl = Hsla::from(base);
    hsl.hue = jitter_hue(hsl.hue / 360.0, hue_shift) * 360.0;
    hsl.saturation = jitter_saturation(hsl.saturation, saturation_shift);
    let rgb = Srgba::from(hsl);
    Srgba::new(
        rgb.red * brightness,
        rgb.green * brightness,
        rgb.blue * brightness,
        1.0,
    )
}

/// Sample the fixed color of one pool slot.
pub fn sample_particle_color<R: Rng + ?Sized>(rng: &mut R, cfg: &PaletteConfig) -> Srgba {
    let base = color_for_index(rng.gen_range(0..BASE_COLORS.len()));
    let hue_j = cfg.hue_jitter.abs();
    let sat_j = cfg.saturation_jitter.abs();
    let hue_shift = rng.gen_range(-hue_j..=hue_j);
    let saturation_shift = rng.gen_range(-sat_j..=sat_j);
    let brightness = cfg.brightness.lerp(rng.gen::<f32>());
    jittered_color(base, hue_shift, saturation_shift, brightness)
}
