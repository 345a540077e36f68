//! Test helpers.
//!
//! Systems are exercised against a bare `World` with `RunSystemOnce`; deferred commands are
//! flushed before returning so assertions see the final state.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// World with default `Tunables` and a zeroed fixed clock.
pub fn world_with_clock() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(Time::<Fixed>::default());
    world
}

/// Move the fixed clock forward; `delta()` becomes `dt` for the next system run.
pub fn advance_fixed(world: &mut World, dt: Duration) {
    world.resource_mut::<Time<Fixed>>().advance_by(dt);
}
