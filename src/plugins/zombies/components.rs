use std::time::Duration;

use bevy::prelude::*;

use super::catalog::{ZombieKind, ZombieType};

/// Marker for the pre-spawned pool slots.
#[derive(Component, Debug, Clone, Copy)]
pub struct PooledZombie;

/// Lifecycle of one pool slot.
///
/// `Pooled -> Active -> {Dead | Despawned} -> Pooled`.
/// `Dead` and `Despawned` are set mid-tick and committed back to `Pooled` at the end of the
/// same fixed step; anything that is not `Active` is ignored by movement and combat.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZombieState {
    #[default]
    Pooled,
    Active,
    /// Killed by a hit. Already credited to the player.
    Dead,
    /// Removed without credit (out of range, kill-all).
    Despawned,
}

impl ZombieState {
    #[inline]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    #[inline]
    pub fn is_pending_return(self) -> bool {
        matches!(self, Self::Dead | Self::Despawned)
    }
}

/// Per-slot stats, copied from a `ZombieType` on activation.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Zombie {
    pub kind: ZombieKind,
    pub health: i32,
    pub attack_power: i32,
    pub chase_speed: f32,
    /// Speed restored by unfreeze. Comes from the template, not from whatever was set last.
    pub base_chase_speed: f32,
}

impl Zombie {
    pub fn from_type(kind: ZombieKind, ty: &ZombieType) -> Self {
        Self {
            kind,
            health: ty.base_health.max(0),
            attack_power: ty.attack_power,
            chase_speed: ty.base_chase_speed,
            base_chase_speed: ty.base_chase_speed,
        }
    }

    #[inline]
    pub fn reset_from(&mut self, kind: ZombieKind, ty: &ZombieType) {
        *self = Self::from_type(kind, ty);
    }

    /// Subtract `amount` (negative treated as zero), flooring at 0.
    /// Returns true when health is at zero afterwards.
    #[inline]
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health = self.health.saturating_sub(amount.max(0)).max(0);
        self.health == 0
    }
}

/// Invulnerability window. `expires_at` is on the fixed simulation clock.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IFrames {
    pub invulnerable: bool,
    pub expires_at: Duration,
}

impl IFrames {
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Bumped every time the slot goes back to the pool.
///
/// Anything scheduled against a slot carries the generation it saw; a mismatch means the
/// slot has been recycled since and the scheduled work must be dropped.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotGeneration(pub u32);

impl SlotGeneration {
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Walk animation the renderer should play.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing toward `target_x` from `from_x`; ties face left, as the walk cycle did.
    #[inline]
    pub fn toward(from_x: f32, target_x: f32) -> Self {
        if target_x - from_x > 0.0 { Self::Right } else { Self::Left }
    }
}

/// Presentation-only hit feedback.
///
/// `Zombie::health` is gameplay truth; this only remembers the last seen value so a drop can
/// be detected without an extra event. `hit_flash` is 1.0 right after a hit and decays to 0.
#[derive(Component, Debug, Clone)]
pub struct ZombieFx {
    pub last_health: i32,
    pub base_tint: Color,
    pub hit_flash: f32,
}

impl ZombieFx {
    /// Time for the red flash to fade back to the base tint.
    pub const FLASH_SECS: f32 = 0.1;

    pub fn new(health: i32, base_tint: Color) -> Self {
        Self { last_health: health, base_tint, hit_flash: 0.0 }
    }

    #[inline]
    pub fn decay(&mut self, dt: f32) {
        self.hit_flash = (self.hit_flash - dt / Self::FLASH_SECS).max(0.0);
    }
}
