//! Buffered horde messages.
//!
//! Everything outside the horde talks to the pool through these:
//! - producers (spawn timer, power-ups, projectiles) write intent
//! - the horde systems are the single writers of pool and slot state
//! - the horde reports outcomes back (kills) for score/audio to consume

use bevy::prelude::*;

use super::catalog::ZombieKind;
use super::components::SlotGeneration;

/// Ask the allocator to activate one pooled zombie at `at`.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnZombieRequest {
    pub kind: ZombieKind,
    pub at: Vec2,
}

/// Global effect applied to every zombie active at the time it is processed.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpEffect {
    /// Chase speed to 0.
    Freeze,
    /// Chase speed back to the type baseline.
    Unfreeze,
    /// Zero health and despawn, without kill credit.
    KillAll,
}

/// A projectile owned by the ranged-weapon collaborator reached `target`.
///
/// `generation` is the `SlotGeneration` the projectile saw at contact; the hit is dropped
/// if the slot has been recycled since.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangedHit {
    pub target: Entity,
    pub generation: SlotGeneration,
    pub damage: i32,
}

/// A zombie died to a player hit. Score and the death cue listen for this.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ZombieKilled {
    pub entity: Entity,
    pub kind: ZombieKind,
    pub at: Vec2,
}
