//! Tunable gameplay constants.
//!
//! Distances are world units, durations are milliseconds unless the field name says otherwise.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_radius: f32,
    pub player_max_health: f32,
    pub player_attack_power: i32,

    /// Melee weapon: i-frame window granted to a zombie it hits.
    pub melee_cooldown_ms: u64,
    /// Melee weapon: how long the hitbox stays live per swing.
    pub melee_swing_ms: u64,
    pub melee_hitbox_half_size: Vec2,
    /// Distance from the player centre to the hitbox centre, on the facing side.
    pub melee_reach: f32,

    /// Fixed number of pre-spawned zombie slots.
    pub pool_capacity: usize,
    pub zombie_radius: f32,

    /// Difficulty ramp numerator: interval = base / (minutes + 1).
    pub base_spawn_interval_ms: f64,
    /// Lower bound applied by the spawner on top of the ramp.
    pub min_spawn_interval_ms: f64,
    /// Length of one difficulty "minute" in seconds.
    pub minute_secs: f32,

    /// Gap between the viewport edge and the spawn point.
    pub spawn_margin: f32,
    /// Vertical spawn band, independent of the player.
    pub spawn_band: (f32, f32),
    /// Despawn when farther than `despawn_viewport_factor * viewport width`.
    pub despawn_viewport_factor: f32,
    /// Chip damage dealt to the player per tick of sustained contact.
    pub contact_damage: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_radius: 13.0,
            player_max_health: 100.0,
            player_attack_power: 40,
            melee_cooldown_ms: 500,
            melee_swing_ms: 300,
            melee_hitbox_half_size: Vec2::new(75.0, 25.0),
            melee_reach: 40.0,
            pool_capacity: 100,
            zombie_radius: 10.0,
            base_spawn_interval_ms: 2000.0,
            min_spawn_interval_ms: 50.0,
            minute_secs: 60.0,
            spawn_margin: 50.0,
            spawn_band: (350.0, 600.0),
            despawn_viewport_factor: 4.0,
            contact_damage: 0.1,
        }
    }
}
