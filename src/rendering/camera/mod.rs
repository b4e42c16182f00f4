pub mod camera;

pub use camera::{handle_viewport_resize, projection_for, CameraPlugin};
