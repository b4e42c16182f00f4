pub mod particles;

pub use particles::{
    spawn_particle_visuals, sync_particle_visuals, ParticleCircleMesh, ParticleVisualsPlugin,
};
