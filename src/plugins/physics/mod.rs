//! Physics plugin: avian2d with zero gravity, scaled to the game's pixel units.
//!
//! Zombies and the player are kinematic: gameplay writes `LinearVelocity` in `FixedUpdate`,
//! avian integrates positions afterwards in the same fixed step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));
}
