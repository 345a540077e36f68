//! Status-effect broadcaster.
//!
//! Power-ups never reach into individual zombies. They send a `PowerUpEffect`, and this
//! module applies it to whatever is active when it is processed. Effects are snapshots:
//! a zombie activated after a freeze moves at its type's speed.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::{PooledZombie, Zombie, ZombieState};
use super::messages::PowerUpEffect;

/// Handle for power-up collaborators.
#[derive(SystemParam)]
pub struct PowerUpEffects<'w> {
    writer: MessageWriter<'w, PowerUpEffect>,
}

impl PowerUpEffects<'_> {
    pub fn freeze_all(&mut self) {
        self.writer.write(PowerUpEffect::Freeze);
    }

    pub fn unfreeze_all(&mut self) {
        self.writer.write(PowerUpEffect::Unfreeze);
    }

    /// "Nuke": clears the screen but awards no kills.
    pub fn kill_all(&mut self) {
        self.writer.write(PowerUpEffect::KillAll);
    }
}

pub fn apply_power_up_effects(
    mut effects: MessageReader<PowerUpEffect>,
    mut q: Query<(&mut ZombieState, &mut Zombie), With<PooledZombie>>,
) {
    for effect in effects.read() {
        let mut touched = 0usize;

        for (mut state, mut zombie) in &mut q {
            if !state.is_active() {
                continue;
            }

            match effect {
                PowerUpEffect::Freeze => zombie.chase_speed = 0.0,
                PowerUpEffect::Unfreeze => zombie.chase_speed = zombie.base_chase_speed,
                PowerUpEffect::KillAll => {
                    zombie.health = 0;
                    *state = ZombieState::Despawned;
                }
            }
            touched += 1;
        }

        debug!("{effect:?} applied to {touched} active zombie(s)");
    }
}
