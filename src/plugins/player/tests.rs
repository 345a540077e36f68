use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::math::bounding::BoundingVolume;
use bevy::prelude::*;
use pretty_assertions::assert_eq;

use crate::common::test_utils::{advance_fixed, run_system_once, world_with_clock};
use crate::common::tunables::Tunables;
use crate::plugins::zombies::catalog::ZombieKind;
use crate::plugins::zombies::messages::ZombieKilled;

use super::*;

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let (health, power) = world
        .query_filtered::<(&PlayerHealth, &AttackPower), With<Player>>()
        .single(&world)
        .unwrap();
    assert_eq!(health.current, 100.0);
    assert_eq!(power.0, 40);
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..default() });
    world.insert_resource(PlayerInput { move_axis: Vec2::new(1.0, 0.0), ..default() });
    world.spawn((Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn receive_damage_floors_at_zero() {
    let mut health = PlayerHealth::new(1.0);
    health.receive_damage(0.4);
    assert!((health.current - 0.6).abs() < 1e-6);

    health.receive_damage(5.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_depleted());

    health.receive_damage(-3.0);
    assert_eq!(health.current, 0.0);
}

#[test]
fn melee_hitbox_sits_on_the_facing_side() {
    let weapon = MeleeWeapon::from_tunables(&Tunables::default());
    let mut hitbox = MeleeHitbox::default();
    assert!(hitbox.volume(Vec2::ZERO, &weapon).is_none());

    hitbox.open(&weapon, -0.3);
    let aabb = hitbox.volume(Vec2::new(10.0, 0.0), &weapon).unwrap();
    assert_eq!(aabb.center(), Vec2::new(10.0 - weapon.reach, 0.0));
    assert_eq!(aabb.half_size(), weapon.hitbox_half_size);
}

#[test]
fn attack_press_opens_swing_that_closes_after_its_duration() {
    let mut world = world_with_clock();
    let weapon = MeleeWeapon::from_tunables(&Tunables::default());
    let swing = weapon.swing;
    world.insert_resource(PlayerInput { attack: true, ..default() });
    let e = world.spawn((Player, weapon, MeleeHitbox::default())).id();

    advance_fixed(&mut world, Duration::from_millis(16));
    run_system_once(&mut world, super::tick_melee_swing);
    assert!(world.get::<MeleeHitbox>(e).unwrap().is_live());
    assert!(!world.resource::<PlayerInput>().attack, "attack press is consumed");

    advance_fixed(&mut world, swing);
    run_system_once(&mut world, super::tick_melee_swing);
    assert!(!world.get::<MeleeHitbox>(e).unwrap().is_live());
}

#[test]
fn kills_are_tallied() {
    let mut world = World::new();
    world.init_resource::<Messages<ZombieKilled>>();
    world.init_resource::<Score>();

    for _ in 0..3 {
        world.write_message(ZombieKilled {
            entity: Entity::PLACEHOLDER,
            kind: ZombieKind::Normal,
            at: Vec2::ZERO,
        });
    }

    run_system_once(&mut world, super::tally_kills);
    assert_eq!(world.resource::<Score>().kill_count, 3);
}
