//! Visible play area, as far as the simulation cares.

use bevy::prelude::*;

/// Written by the camera plugin from the primary window; headless runs keep the default.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0 }
    }
}
