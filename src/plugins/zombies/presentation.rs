//! Presentation derived from gameplay state.
//!
//! Reads `Zombie` and `Facing`, writes only `ZombieFx` and `Sprite`. Nothing here feeds
//! back into the simulation.

use bevy::prelude::*;

use super::components::{Facing, PooledZombie, Zombie, ZombieFx, ZombieState};

const HIT_FLASH_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Flash red on a health drop, ease back to the type tint, and flip with the walk direction.
pub fn sync_zombie_sprites(
    time: Res<Time>,
    mut q: Query<(&Zombie, &ZombieState, &Facing, &mut ZombieFx, &mut Sprite), With<PooledZombie>>,
) {
    let dt = time.delta_secs();

    for (zombie, state, facing, mut fx, mut sprite) in &mut q {
        if !state.is_active() {
            continue;
        }

        if zombie.health < fx.last_health {
            fx.hit_flash = 1.0;
        }
        fx.last_health = zombie.health;

        sprite.flip_x = *facing == Facing::Left;

        if fx.hit_flash <= 0.0 {
            sprite.color = fx.base_tint;
            continue;
        }

        sprite.color = blend(fx.base_tint, HIT_FLASH_COLOR, fx.hit_flash);
        fx.decay(dt);
    }
}

fn blend(base: Color, flash: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let a = base.to_srgba();
    let b = flash.to_srgba();
    Color::srgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}
