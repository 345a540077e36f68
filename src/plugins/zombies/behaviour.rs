//! Per-step zombie behaviour: chase the player, give up when too far away.
//!
//! No pathfinding: a zombie heads straight for the player's current position.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::common::viewport::Viewport;
use crate::plugins::player::Player;

use super::components::{Facing, PooledZombie, Zombie, ZombieState};

/// Point every active zombie at the player with its current chase speed (units per second).
///
/// A frozen zombie (`chase_speed == 0`) ends up with zero velocity but still turns to face
/// the player.
pub fn chase_player(
    q_player: Query<&Transform, With<Player>>,
    mut q_zombies: Query<(
        &Zombie,
        &ZombieState,
        &Transform,
        &mut LinearVelocity,
        &mut Facing,
    ), (With<PooledZombie>, Without<Player>)>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let target = player_tf.translation.truncate();

    for (zombie, state, tf, mut vel, mut facing) in &mut q_zombies {
        if !state.is_active() {
            continue;
        }

        let at = tf.translation.truncate();
        vel.0 = (target - at).normalize_or_zero() * zombie.chase_speed;
        facing.set_if_neq(Facing::toward(at.x, target.x));
    }
}

/// Despawn (no credit) every active zombie farther than `despawn_viewport_factor` viewport
/// widths from the player. Skipped entirely for a step without a player.
pub fn despawn_out_of_range(
    tunables: Res<Tunables>,
    viewport: Res<Viewport>,
    q_player: Query<&Transform, With<Player>>,
    mut q_zombies: Query<(Entity, &Transform, &mut ZombieState), (With<PooledZombie>, Without<Player>)>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let player = player_tf.translation.truncate();
    let limit = tunables.despawn_viewport_factor * viewport.width;
    let limit_sq = limit * limit;

    for (e, tf, mut state) in &mut q_zombies {
        if !state.is_active() {
            continue;
        }

        if tf.translation.truncate().distance_squared(player) > limit_sq {
            trace!("Zombie {e:?} out of range; despawning");
            *state = ZombieState::Despawned;
        }
    }
}
