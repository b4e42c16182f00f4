pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::plugin::{ConfigLoadReport, ParticleBurstPlugin};
pub use core::config::{BurstConfig, WindowConfig};
pub use core::viewport::ViewportSize;
pub use gameplay::burst::{BurstAnimator, BurstPhase, TickOutcome};
