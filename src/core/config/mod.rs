pub mod config;

pub use config::{
    BurstConfig, BurstTimingConfig, PaletteConfig, PoolConfig, SpawnRange, WindowConfig,
    DEFAULT_CONFIG_LAYERS,
};
