//! Player plugin: the horde's single target.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource; tally kills into `Score`
//! - FixedUpdate: apply velocity to the kinematic body, open/close the melee hitbox
//!
//! The horde only reads the player through `Transform`, `AttackPower`, `MeleeWeapon` and
//! `MeleeHitbox`, and writes to it only through `PlayerHealth::receive_damage`.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{
    layers::Layer,
    state::{GameState, InGameState},
    tunables::Tunables,
};
use crate::plugins::zombies::messages::ZombieKilled;

#[derive(Component)]
pub struct Player;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerHealth {
    pub current: f32,
    pub max: f32,
}

impl PlayerHealth {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    #[inline]
    pub fn receive_damage(&mut self, amount: f32) {
        self.current = (self.current - amount.max(0.0)).max(0.0);
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// Damage one landed weapon hit deals.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackPower(pub i32);

/// Stats of the equipped melee weapon.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MeleeWeapon {
    /// Also the i-frame window granted to a zombie this weapon hits.
    pub attack_cooldown: Duration,
    pub swing: Duration,
    pub hitbox_half_size: Vec2,
    pub reach: f32,
}

impl MeleeWeapon {
    pub fn from_tunables(t: &Tunables) -> Self {
        Self {
            attack_cooldown: Duration::from_millis(t.melee_cooldown_ms),
            swing: Duration::from_millis(t.melee_swing_ms),
            hitbox_half_size: t.melee_hitbox_half_size,
            reach: t.melee_reach,
        }
    }
}

/// Live melee hitbox. `remaining == 0` means no swing is in progress.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct MeleeHitbox {
    pub remaining: Duration,
    /// -1.0 left, 1.0 right; fixed for the whole swing.
    pub facing: f32,
}

impl MeleeHitbox {
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.remaining.is_zero()
    }

    pub fn open(&mut self, weapon: &MeleeWeapon, facing: f32) {
        self.remaining = weapon.swing;
        self.facing = if facing < 0.0 { -1.0 } else { 1.0 };
    }

    /// World-space hitbox while a swing is live.
    pub fn volume(&self, player: Vec2, weapon: &MeleeWeapon) -> Option<Aabb2d> {
        self.is_live().then(|| {
            let center = player + Vec2::X * (self.facing * weapon.reach);
            Aabb2d::new(center, weapon.hitbox_half_size)
        })
    }
}

/// Kill tally, fed by `ZombieKilled`.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Score {
    pub kill_count: u32,
}

#[derive(Resource, Debug)]
struct PlayerInput {
    move_axis: Vec2,
    facing: f32,
    attack: bool,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self { move_axis: Vec2::ZERO, facing: 1.0, attack: false }
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .init_resource::<Score>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, tally_kills).run_if(in_state(InGameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            (apply_movement, tick_melee_swing).run_if(in_state(InGameState::Playing)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Enemy]);
    let radius = tunables.player_radius;

    commands.spawn((
        Name::new("Player"),
        Player,
        PlayerHealth::new(tunables.player_max_health),
        AttackPower(tunables.player_attack_power),
        MeleeWeapon::from_tunables(&tunables),
        MeleeHitbox::default(),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(radius * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(radius),
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
    if axis.x != 0.0 {
        input.facing = axis.x.signum();
    }
    // Latched until the fixed step consumes it.
    input.attack |= keys.just_pressed(KeyCode::KeyJ);
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
}

/// Open the hitbox on a fresh attack press; close it once the swing has run its course.
fn tick_melee_swing(
    time: Res<Time<Fixed>>,
    mut input: ResMut<PlayerInput>,
    mut q_player: Query<(&MeleeWeapon, &mut MeleeHitbox), With<Player>>,
) {
    let Ok((weapon, mut hitbox)) = q_player.single_mut() else {
        return;
    };

    if hitbox.is_live() {
        hitbox.remaining = hitbox.remaining.saturating_sub(time.delta());
    } else if std::mem::take(&mut input.attack) {
        hitbox.open(weapon, input.facing);
    }
}

pub fn tally_kills(mut kills: MessageReader<ZombieKilled>, mut score: ResMut<Score>) {
    for _ in kills.read() {
        score.kill_count += 1;
    }
}

#[cfg(test)]
mod tests;
