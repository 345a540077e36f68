//! Return commit: recycle dead and despawned zombies back into the pool.
//!
//! This system is the owner of the *Pooled invariants*:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)
//! - no invulnerability, and a new slot generation so older scheduled expiries go stale
//!
//! Centralizing these writes here keeps every exit path (death, range, kill-all) identical.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{IFrames, PooledZombie, SlotGeneration, ZombieState};
use super::pool::{inactive_zombie_layers, ZombiePool};

pub fn return_to_pool_commit(
    mut pool: ResMut<ZombiePool>,
    mut q: Query<(
        Entity,
        &mut ZombieState,
        &mut IFrames,
        &mut SlotGeneration,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledZombie>>,
) {
    for (e, mut state, mut iframes, mut generation, mut vis, mut vel, mut layers) in &mut q {
        if !state.is_pending_return() {
            continue;
        }

        *state = ZombieState::Pooled;
        iframes.clear();
        generation.bump();
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_zombie_layers();

        pool.push_free(e);
    }
}
