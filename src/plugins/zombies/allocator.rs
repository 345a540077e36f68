//! Spawn consumer: activate zombies from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list only ever holds entities created by `init_zombie_pool`.
//! - Therefore, a free entity must match the pooled zombie query.
//!
//! A mismatch is a bug in the pool, not a gameplay condition, so we `expect()` on it.
//! Running out of slots is a capacity decision and is dropped quietly.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::catalog::ZombieCatalog;
use super::components::{Facing, IFrames, PooledZombie, Zombie, ZombieFx, ZombieState};
use super::messages::SpawnZombieRequest;
use super::pool::{active_zombie_layers, ZombiePool};

pub fn allocate_zombies_from_pool(
    catalog: Res<ZombieCatalog>,
    mut pool: ResMut<ZombiePool>,
    mut reader: MessageReader<SpawnZombieRequest>,
    mut q: Query<(
        &mut ZombieState,
        &mut Zombie,
        &mut IFrames,
        &mut ZombieFx,
        &mut Facing,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut Sprite,
        &mut CollisionLayers,
    ), With<PooledZombie>>,
) {
    let mut dropped = 0usize;

    for req in reader.read() {
        let Some(template) = catalog.get(req.kind) else {
            warn!("No {:?} entry in the zombie catalog; spawn request dropped", req.kind);
            continue;
        };

        let Some(e) = pool.pop_free() else {
            dropped += 1;
            continue;
        };

        let (mut state, mut zombie, mut iframes, mut fx, mut facing, mut tf, mut vel, mut vis, mut sprite, mut layers) =
            q.get_mut(e).expect("ZombiePool contained an entity missing pooled zombie components");

        debug_assert_eq!(*state, ZombieState::Pooled, "free list handed out a slot that is in use");

        *state = ZombieState::Active;
        zombie.reset_from(req.kind, template);
        iframes.clear();
        *fx = ZombieFx::new(zombie.health, template.tint_color());
        *facing = Facing::default();
        tf.translation = req.at.extend(tf.translation.z);
        vel.0 = Vec2::ZERO;
        *vis = Visibility::Visible;
        sprite.color = template.tint_color();
        *layers = active_zombie_layers();
    }

    if dropped > 0 {
        debug!("Zombie pool exhausted ({} slots): dropped {dropped} spawn request(s)", pool.capacity());
    }
}
