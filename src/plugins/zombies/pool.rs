//! Fixed-capacity zombie pool.
//!
//! Every slot is spawned once at startup and lives for the whole session. Slots are never
//! despawned; "inactive" is a set of component values, not a structural change:
//! - `ZombieState::Pooled`
//! - hidden, zero velocity
//! - empty collision filters, so the physics world ignores it
//!
//! `free` is a LIFO free list, so activate/return are both O(1).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

use super::catalog::{ZombieKind, ZombieType};
use super::components::{Facing, IFrames, PooledZombie, SlotGeneration, Zombie, ZombieFx, ZombieState};

#[derive(Resource, Debug)]
pub struct ZombiePool {
    free: Vec<Entity>,
    capacity: usize,
}

impl ZombiePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Slots currently handed out (active, or dead/despawned awaiting commit).
    #[inline]
    pub fn in_use(&self) -> usize {
        self.capacity - self.free.len()
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<Entity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: Entity) {
        debug_assert!(self.free.len() < self.capacity, "ZombiePool free list overflow");
        self.free.push(e);
    }
}

#[inline]
pub fn active_zombie_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Player])
}

/// Membership stays `Enemy`, filters are empty: collides with nothing.
#[inline]
pub fn inactive_zombie_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

/// Pre-spawn `capacity` pooled zombies, all inactive.
pub fn init_zombie_pool(mut commands: Commands, tunables: Res<Tunables>, mut pool: ResMut<ZombiePool>) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    let template = ZombieType::NORMAL;
    let radius = tunables.zombie_radius;

    for i in 0..cap {
        let e = commands
            .spawn((
                Name::new(format!("Zombie(Pooled {i})")),
                PooledZombie,
                ZombieState::Pooled,
                Zombie::from_type(ZombieKind::Normal, &template),
                IFrames::default(),
                SlotGeneration::default(),
                Facing::default(),
                ZombieFx::new(template.base_health, template.tint_color()),
                Sprite {
                    color: template.tint_color(),
                    custom_size: Some(Vec2::splat(radius * 2.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 1.5),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::circle(radius),
                inactive_zombie_layers(),
                LinearVelocity(Vec2::ZERO),
            ))
            .id();

        pool.free.push(e);
    }

    debug!("Zombie pool ready: {cap} slots");
}
