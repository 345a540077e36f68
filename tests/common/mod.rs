//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `zombie_horde::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed amount per `update()`, so fixed-step counts are reproducible.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use zombie_horde::plugins::zombies::components::ZombieState;
use zombie_horde::plugins::zombies::spawner::SpawnRng;

/// Simulated time per `app.update()`.
pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists for avian.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    zombie_horde::game::configure_headless(&mut app);

    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(SpawnRng::seeded(11));

    // `App::run` normally finishes plugins; avian registers its diagnostics resources there.
    app.finish();
    app.cleanup();
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn count_in(app: &mut App, wanted: ZombieState) -> usize {
    app.world_mut()
        .query::<&ZombieState>()
        .iter(app.world())
        .filter(|s| **s == wanted)
        .count()
}
