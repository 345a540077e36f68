//! Combat resolution between the player and the horde.
//!
//! `resolve_hit` is the only place zombie health goes down. It is a plain function over the
//! pieces of one slot, so the invulnerability guard and the death transition are the same no
//! matter which system found the overlap.
//!
//! Invariants it keeps:
//! - only `Active` slots take damage
//! - while `IFrames::invulnerable` is set, repeated hits are no-ops
//! - health floors at 0 and the transition to `Dead` happens once, on the hit that got there

use std::time::Duration;

use bevy::math::bounding::{BoundingCircle, IntersectsVolume};
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::{AttackPower, MeleeHitbox, MeleeWeapon, Player, PlayerHealth};

use super::components::{IFrames, PooledZombie, SlotGeneration, Zombie, ZombieState};
use super::iframes::IFrameSchedule;
use super::messages::{RangedHit, ZombieKilled};

/// What dealt the damage, carrying what the resolver needs from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Grants an i-frame window as long as the weapon's cooldown.
    Melee { cooldown: Duration },
    /// No i-frame: every ranged hit lands.
    Ranged,
}

impl DamageSource {
    #[inline]
    fn iframe_window(self) -> Duration {
        match self {
            Self::Melee { cooldown } => cooldown,
            Self::Ranged => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub amount: i32,
    pub source: DamageSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Target is not an active zombie.
    Ignored,
    /// Target is inside an i-frame window.
    Blocked,
    Wounded { remaining: i32 },
    Killed,
}

/// Receiver for combat outcomes that leave the horde (score, death cue).
pub trait CombatSink {
    fn zombie_killed(&mut self, kill: ZombieKilled);
}

impl CombatSink for MessageWriter<'_, ZombieKilled> {
    fn zombie_killed(&mut self, kill: ZombieKilled) {
        self.write(kill);
    }
}

impl CombatSink for Vec<ZombieKilled> {
    fn zombie_killed(&mut self, kill: ZombieKilled) {
        self.push(kill);
    }
}

/// Borrowed view of one pool slot for the resolver.
pub struct HitTarget<'a> {
    pub entity: Entity,
    pub at: Vec2,
    pub generation: SlotGeneration,
    pub state: &'a mut ZombieState,
    pub zombie: &'a mut Zombie,
    pub iframes: &'a mut IFrames,
}

pub fn resolve_hit(
    target: HitTarget<'_>,
    hit: Hit,
    now: Duration,
    schedule: &mut IFrameSchedule,
    sink: &mut impl CombatSink,
) -> HitOutcome {
    if !target.state.is_active() {
        trace!("Hit on inactive zombie {:?} ({:?}) ignored", target.entity, target.state);
        return HitOutcome::Ignored;
    }

    if target.iframes.invulnerable {
        return HitOutcome::Blocked;
    }

    let dead = target.zombie.take_damage(hit.amount);

    let window = hit.source.iframe_window();
    if !window.is_zero() && !dead {
        let expires_at = now + window;
        target.iframes.invulnerable = true;
        target.iframes.expires_at = expires_at;
        schedule.schedule(target.entity, target.generation, expires_at);
    }

    if dead {
        *target.state = ZombieState::Dead;
        sink.zombie_killed(ZombieKilled {
            entity: target.entity,
            kind: target.zombie.kind,
            at: target.at,
        });
        return HitOutcome::Killed;
    }

    HitOutcome::Wounded {
        remaining: target.zombie.health,
    }
}

/// Every active zombie overlapping the live melee hitbox takes the player's attack power.
///
/// This runs every step the overlap persists; the i-frame window is what limits it to one
/// hit per cooldown.
pub fn resolve_melee_hits(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut schedule: ResMut<IFrameSchedule>,
    mut kills: MessageWriter<ZombieKilled>,
    q_player: Query<(&Transform, &AttackPower, &MeleeWeapon, &MeleeHitbox), With<Player>>,
    mut q_zombies: Query<(
        Entity,
        &Transform,
        &SlotGeneration,
        &mut ZombieState,
        &mut Zombie,
        &mut IFrames,
    ), (With<PooledZombie>, Without<Player>)>,
) {
    let Ok((player_tf, power, weapon, hitbox)) = q_player.single() else {
        return;
    };
    let Some(volume) = hitbox.volume(player_tf.translation.truncate(), weapon) else {
        return;
    };

    let now = time.elapsed();
    let hit = Hit {
        amount: power.0,
        source: DamageSource::Melee { cooldown: weapon.attack_cooldown },
    };

    for (entity, tf, generation, mut state, mut zombie, mut iframes) in &mut q_zombies {
        if !state.is_active() {
            continue;
        }

        let at = tf.translation.truncate();
        if !BoundingCircle::new(at, tunables.zombie_radius).intersects(&volume) {
            continue;
        }

        let target = HitTarget {
            entity,
            at,
            generation: *generation,
            state: &mut *state,
            zombie: &mut *zombie,
            iframes: &mut *iframes,
        };
        resolve_hit(target, hit, now, &mut schedule, &mut kills);
    }
}

/// Apply projectile hits reported by the ranged-weapon collaborator.
pub fn resolve_ranged_hits(
    time: Res<Time<Fixed>>,
    mut hits: MessageReader<RangedHit>,
    mut schedule: ResMut<IFrameSchedule>,
    mut kills: MessageWriter<ZombieKilled>,
    mut q_zombies: Query<(
        &Transform,
        &SlotGeneration,
        &mut ZombieState,
        &mut Zombie,
        &mut IFrames,
    ), With<PooledZombie>>,
) {
    let now = time.elapsed();

    for ranged in hits.read() {
        let Ok((tf, generation, mut state, mut zombie, mut iframes)) = q_zombies.get_mut(ranged.target) else {
            trace!("Ranged hit on {:?}, which is not a pooled zombie", ranged.target);
            continue;
        };

        if *generation != ranged.generation {
            trace!(
                "Stale ranged hit on {:?} (gen {} != {}) ignored",
                ranged.target, ranged.generation.0, generation.0
            );
            continue;
        }

        let target = HitTarget {
            entity: ranged.target,
            at: tf.translation.truncate(),
            generation: *generation,
            state: &mut *state,
            zombie: &mut *zombie,
            iframes: &mut *iframes,
        };
        let hit = Hit { amount: ranged.damage, source: DamageSource::Ranged };
        resolve_hit(target, hit, now, &mut schedule, &mut kills);
    }
}

/// Continuous chip damage: every step a zombie overlaps the player, the player loses
/// `contact_damage`. Several overlapping zombies stack.
pub fn apply_contact_damage(
    tunables: Res<Tunables>,
    mut q_player: Query<(&Transform, &mut PlayerHealth), With<Player>>,
    q_zombies: Query<(&Transform, &ZombieState), (With<PooledZombie>, Without<Player>)>,
) {
    let Ok((player_tf, mut health)) = q_player.single_mut() else {
        return;
    };
    let player = BoundingCircle::new(player_tf.translation.truncate(), tunables.player_radius);

    for (tf, state) in &q_zombies {
        if !state.is_active() {
            continue;
        }
        let body = BoundingCircle::new(tf.translation.truncate(), tunables.zombie_radius);
        if body.intersects(&player) {
            health.receive_damage(tunables.contact_damage);
        }
    }
}
