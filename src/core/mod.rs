pub mod components;
pub mod config;
pub mod system;
pub mod viewport;
