//! Core plugin: shared resources, global settings and pause.

use bevy::prelude::*;

use crate::common::state::{GameState, InGameState};
use crate::common::tunables::Tunables;
use crate::common::viewport::Viewport;
use crate::plugins::zombies::catalog::ZombieCatalog;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default())
        .insert_resource(Viewport::default())
        .insert_resource(ZombieCatalog::default())
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));

    app.add_systems(Update, toggle_pause.run_if(in_state(GameState::InGame)))
        .add_systems(OnEnter(InGameState::Paused), pause_virtual_time)
        .add_systems(OnExit(InGameState::Paused), resume_virtual_time);
}

fn toggle_pause(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    state: Res<State<InGameState>>,
    mut next: ResMut<NextState<InGameState>>,
) {
    let Some(keys) = keys else { return; };
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }

    next.set(match state.get() {
        InGameState::Playing => InGameState::Paused,
        InGameState::Paused => InGameState::Playing,
    });
}

/// Fixed steps stop accumulating while virtual time is paused.
fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    info!("Paused");
    time.pause();
}

fn resume_virtual_time(mut time: ResMut<Time<Virtual>>) {
    info!("Resumed");
    time.unpause();
}
