use bevy::prelude::*;

/// Pool slot index linking a drawable entity to its record in the animator.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct ParticleSlot(pub usize);

/// Tag component for the circle mesh drawn for a particle slot.
#[derive(Component)]
pub struct ParticleCircleVisual;

/// Opacity last written for the slot (mirrors the material alpha; readable headless).
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, Default, PartialEq)]
pub struct ParticleOpacity(pub f32);

/// Marker for the single camera looking at the burst field.
#[derive(Component)]
pub struct BurstCamera;
