pub mod palette;

pub use palette::{
    color_for_index, jitter_hue, jitter_saturation, jittered_color, sample_particle_color,
    BASE_COLORS,
};
