//! Zombies plugin: pooled horde, difficulty ramp, combat and global effects.
//!
//! # Model
//! A fixed number of zombie entities is spawned once at startup. Gameplay never spawns or
//! despawns them; it flips `ZombieState` and the handful of components that make a slot
//! visible and collidable. Everything runs on the fixed clock, single-threaded by ordering.
//!
//! # Data flow (one fixed step)
//! ```text
//! FixedUpdate, InGameState::Playing
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Clock: tick_difficulty_ramp -> tick_spawn_timer                       │
//!│      - mutates: SpawnState (once per elapsed minute)                       │
//!│      - writes: SpawnZombieRequest x enemies_per_batch per timer firing     │
//!│                                                                            │
//!│  (B) Spawn: allocate_zombies_from_pool                                     │
//!│      - reads: SpawnZombieRequest, ZombieCatalog                            │
//!│      - mutates: ZombiePool.free (pop), slot components -> Active           │
//!│                                                                            │
//!│  (C) Effects: apply_power_up_effects                                       │
//!│      - reads: PowerUpEffect                                                │
//!│      - mutates: Active zombies only (speed, or -> Despawned)               │
//!│                                                                            │
//!│  (D) Simulate                                                              │
//!│      expire_iframes -> chase_player -> despawn_out_of_range                │
//!│      -> apply_contact_damage -> resolve_melee_hits -> resolve_ranged_hits  │
//!│      - writes: ZombieKilled                                                │
//!│                                                                            │
//!│  (E) Commit: return_to_pool_commit                                         │
//!│      - reads: Dead | Despawned slots                                       │
//!│      - mutates: slot -> Pooled, SlotGeneration += 1, ZombiePool.free push  │
//!└────────────────────────────────────────────────────────────────────────────┘
//!
//! PostUpdate: sync_zombie_sprites (hit flash, facing). Presentation only.
//! ```
//!
//! # Who writes what
//! - `ZombiePool` is mutated by the allocator (pop) and the commit (push), nothing else.
//! - Health only goes down in `combat::resolve_hit` and on kill-all.
//! - Collaborators (power-ups, projectiles, debug tools) go through `ZombieSpawner`,
//!   `PowerUpEffects` or `RangedHit` and never touch slot components directly.
//!
//! Pausing is `InGameState::Paused`: every fixed system here is gated on `Playing`, and the
//! core plugin pauses virtual time, so timers and i-frame deadlines do not move while paused.

pub mod catalog;
pub mod components;
pub mod messages;
pub mod pool;

pub mod allocator;
pub mod behaviour;
pub mod combat;
pub mod commit;
pub mod difficulty;
pub mod effects;
pub mod iframes;
pub mod presentation;
pub mod spawner;

use bevy::prelude::*;

use crate::common::state::InGameState;
use crate::common::tunables::Tunables;

/// Phases of one horde step, in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HordeSet {
    Clock,
    Spawn,
    Effects,
    Simulate,
    Commit,
}

pub fn plugin(app: &mut App) {
    let (capacity, base_interval_ms, floor_ms, minute_secs) = {
        let t = app.world().resource::<Tunables>();
        (t.pool_capacity, t.base_spawn_interval_ms, t.min_spawn_interval_ms, t.minute_secs)
    };

    let spawn_state = difficulty::SpawnState::new(base_interval_ms);
    let first_period =
        spawner::effective_spawn_interval(&spawn_state, floor_ms, Time::<Fixed>::default().timestep());

    app.insert_resource(pool::ZombiePool::new(capacity))
        .insert_resource(difficulty::MinuteTracker::new(minute_secs))
        .insert_resource(spawn_state)
        .insert_resource(spawner::SpawnTimer::new(first_period))
        .init_resource::<catalog::ZombieCatalog>()
        .init_resource::<spawner::SpawnRng>()
        .init_resource::<spawner::SpawnMix>()
        .init_resource::<iframes::IFrameSchedule>();

    app.add_message::<messages::SpawnZombieRequest>()
        .add_message::<messages::PowerUpEffect>()
        .add_message::<messages::RangedHit>()
        .add_message::<messages::ZombieKilled>();

    app.add_systems(Startup, pool::init_zombie_pool);

    app.configure_sets(
        FixedUpdate,
        (
            HordeSet::Clock,
            HordeSet::Spawn,
            HordeSet::Effects,
            HordeSet::Simulate,
            HordeSet::Commit,
        )
            .chain()
            .distributive_run_if(in_state(InGameState::Playing)),
    );

    app.add_systems(
        FixedUpdate,
        (
            (difficulty::tick_difficulty_ramp, spawner::tick_spawn_timer)
                .chain()
                .in_set(HordeSet::Clock),
            allocator::allocate_zombies_from_pool.in_set(HordeSet::Spawn),
            effects::apply_power_up_effects.in_set(HordeSet::Effects),
            (
                iframes::expire_iframes,
                behaviour::chase_player,
                behaviour::despawn_out_of_range,
                combat::apply_contact_damage,
                combat::resolve_melee_hits,
                combat::resolve_ranged_hits,
            )
                .chain()
                .in_set(HordeSet::Simulate),
            commit::return_to_pool_commit.in_set(HordeSet::Commit),
        ),
    );

    app.add_systems(
        PostUpdate,
        presentation::sync_zombie_sprites.run_if(in_state(InGameState::Playing)),
    );
}
