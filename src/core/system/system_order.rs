//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Viewport (window resize -> camera bounds + viewport size)
//! 2. Tick (advance the burst animator by the measured frame delta)
//! 3. Sync (write particle position / opacity into drawable entities)
//! 4. Rendering (implicit, Bevy)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ViewportSet; // resize handling, must see the new size before the tick

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BurstTickSet; // animator state mutation

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DrawSyncSet; // animator -> entity transforms / materials
