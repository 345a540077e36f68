//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod physics;
pub mod player;
pub mod zombies;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
///
/// Order matters: `core` inserts the `Tunables` the others read while building.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    player::plugin(app);
    zombies::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
