//! Drawable side of the particle pool: one circle entity per slot.
//!
//! Entities are spawned once at startup and never despawned. Every frame the sync system copies
//! position and opacity from the [`BurstAnimator`] into the entity transform and material alpha.
//! Mesh/material assets are optional so the same systems run headless under `MinimalPlugins`.

use bevy::prelude::*;
use bevy::sprite::AlphaMode2d;

use crate::core::components::{ParticleCircleVisual, ParticleOpacity, ParticleSlot};
use crate::core::config::BurstConfig;
use crate::core::system::system_order::DrawSyncSet;
use crate::gameplay::burst::{burst_init, BurstAnimator};

/// Shared circle mesh for every particle slot.
#[derive(Resource)]
pub struct ParticleCircleMesh(pub Handle<Mesh>);

pub struct ParticleVisualsPlugin;

impl Plugin for ParticleVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_particle_visuals.after(burst_init))
            .add_systems(Update, sync_particle_visuals.in_set(DrawSyncSet));
    }
}

/// System: spawn the drawable for each pool slot (transparent, at the first origin).
pub fn spawn_particle_visuals(
    mut commands: Commands,
    cfg: Res<BurstConfig>,
    animator: Option<Res<BurstAnimator>>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<ColorMaterial>>>,
) {
    let Some(animator) = animator else {
        warn!("BurstAnimator missing at startup; no particle visuals spawned");
        return;
    };
    let mut render_assets = match (meshes, materials) {
        (Some(mut meshes), Some(materials)) => {
            let mesh = meshes.add(
                Circle::new(cfg.pool.radius)
                    .mesh()
                    .resolution(cfg.pool.segments.max(3))
                    .build(),
            );
            commands.insert_resource(ParticleCircleMesh(mesh.clone()));
            Some((mesh, materials))
        }
        _ => None,
    };
    for draw in animator.draws() {
        let mut entity = commands.spawn((
            ParticleSlot(draw.slot),
            ParticleOpacity(draw.opacity),
            Transform::from_translation(draw.position.extend(0.0)),
            Visibility::default(),
        ));
        if let Some((mesh, materials)) = render_assets.as_mut() {
            let material = materials.add(ColorMaterial {
                color: Color::from(draw.color.with_alpha(draw.opacity)),
                alpha_mode: AlphaMode2d::Blend,
                ..default()
            });
            entity.insert((
                Mesh2d(mesh.clone()),
                MeshMaterial2d(material),
                ParticleCircleVisual,
            ));
        }
    }
    debug!(slots = animator.len(), headless = render_assets.is_none(), "Particle visuals spawned");
}

/// System: copy animator state into transforms, opacity components and material alpha.
pub fn sync_particle_visuals(
    animator: Option<Res<BurstAnimator>>,
    mut materials: Option<ResMut<Assets<ColorMaterial>>>,
    mut q_particles: Query<(
        &ParticleSlot,
        &mut Transform,
        &mut ParticleOpacity,
        Option<&MeshMaterial2d<ColorMaterial>>,
    )>,
) {
    let Some(animator) = animator else { return };
    if !animator.is_changed() {
        return;
    }
    for (slot, mut transform, mut opacity, material) in q_particles.iter_mut() {
        let Some(draw) = animator.draw(slot.0) else {
            continue;
        };
        let translation = draw.position.extend(transform.translation.z);
        if transform.translation != translation {
            transform.translation = translation;
        }
        if opacity.set_if_neq(ParticleOpacity(draw.opacity)) {
            if let (Some(handle), Some(materials)) = (material, materials.as_mut()) {
                if let Some(mat) = materials.get_mut(&handle.0) {
                    mat.color.set_alpha(draw.opacity);
                }
            }
        }
    }
}
