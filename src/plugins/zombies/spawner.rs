//! Spawn producer: timer-driven batches of `SpawnZombieRequest`.
//!
//! This module never touches `ZombiePool`. It only decides *what* and *where*; the allocator
//! decides whether a slot is available.

use std::time::Duration;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::tunables::Tunables;
use crate::common::viewport::Viewport;
use crate::plugins::player::Player;

use super::catalog::ZombieKind;
use super::difficulty::SpawnState;
use super::messages::SpawnZombieRequest;

/// Randomness for spawn side, vertical band and type mix. Seed it in tests.
#[derive(Resource, Debug)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

/// Which kind a timer batch spawns.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum SpawnMix {
    Uniform(ZombieKind),
    /// Relative weights; zero-weight entries never spawn.
    Weighted(Vec<(ZombieKind, u32)>),
}

impl Default for SpawnMix {
    fn default() -> Self {
        Self::Uniform(ZombieKind::Normal)
    }
}

impl SpawnMix {
    pub fn pick(&self, rng: &mut impl Rng) -> ZombieKind {
        match self {
            Self::Uniform(kind) => *kind,
            Self::Weighted(table) => {
                let total: u64 = table.iter().map(|(_, w)| u64::from(*w)).sum();
                if total == 0 {
                    return ZombieKind::default();
                }
                let mut roll = rng.random_range(0..total);
                for (kind, weight) in table {
                    let weight = u64::from(*weight);
                    if roll < weight {
                        return *kind;
                    }
                    roll -= weight;
                }
                ZombieKind::default()
            }
        }
    }
}

/// Repeating spawn timer on the fixed clock.
///
/// Its duration is only rewritten right after it fires, so a ramp change never shortens or
/// stretches the period already in progress.
#[derive(Resource, Debug, Clone)]
pub struct SpawnTimer(pub Timer);

impl SpawnTimer {
    pub fn new(period: Duration) -> Self {
        Self(Timer::new(period, TimerMode::Repeating))
    }
}

/// Ramp interval clamped to the configured floor and to at least one fixed step.
///
/// Non-finite or non-positive intervals collapse to the floor instead of starving the
/// schedule with zero-length periods.
pub fn effective_spawn_interval(state: &SpawnState, floor_ms: f64, timestep: Duration) -> Duration {
    let requested = Duration::try_from_secs_f64(state.spawn_interval_ms / 1000.0).unwrap_or(Duration::ZERO);
    let floor = Duration::try_from_secs_f64(floor_ms / 1000.0).unwrap_or(Duration::ZERO);
    let min_tick = timestep.max(Duration::from_millis(1));

    requested.max(floor).max(min_tick)
}

/// A point just outside the viewport, left or right of the player with equal odds.
///
/// The vertical coordinate comes from the fixed band and ignores the player entirely.
pub fn spawn_point(rng: &mut impl Rng, player: Vec2, viewport_width: f32, tunables: &Tunables) -> Vec2 {
    let offset = viewport_width + tunables.spawn_margin;
    let x = if rng.random_bool(0.5) {
        player.x - offset
    } else {
        player.x + offset
    };

    let (a, b) = tunables.spawn_band;
    let (lo, hi) = (a.min(b), a.max(b));
    let y = rng.random_range(lo..=hi);

    Vec2::new(x, y)
}

/// The public door into the pool for spawning.
///
/// Callers (the timer below, debug tools, scripted encounters) describe what they want; the
/// allocator applies it later in the same fixed step.
#[derive(SystemParam)]
pub struct ZombieSpawner<'w> {
    requests: MessageWriter<'w, SpawnZombieRequest>,
    rng: ResMut<'w, SpawnRng>,
    viewport: Res<'w, Viewport>,
    tunables: Res<'w, Tunables>,
}

impl ZombieSpawner<'_> {
    /// Request one zombie of `kind` at `at`. Dropped silently if the pool is full.
    pub fn activate(&mut self, kind: ZombieKind, at: Vec2) {
        self.requests.write(SpawnZombieRequest { kind, at });
    }

    /// Request `count` zombies of `kind`, each at its own off-screen point around `player`.
    pub fn spawn_batch(&mut self, count: u32, kind: ZombieKind, player: Vec2) {
        for _ in 0..count {
            let at = spawn_point(&mut self.rng.0, player, self.viewport.width, &self.tunables);
            self.activate(kind, at);
        }
    }

    pub fn pick_kind(&mut self, mix: &SpawnMix) -> ZombieKind {
        mix.pick(&mut self.rng.0)
    }
}

/// Fire the spawn timer: each completed period requests one batch.
pub fn tick_spawn_timer(
    time: Res<Time<Fixed>>,
    state: Res<SpawnState>,
    mix: Res<SpawnMix>,
    mut timer: ResMut<SpawnTimer>,
    mut spawner: ZombieSpawner,
    q_player: Query<&Transform, With<Player>>,
) {
    timer.0.tick(time.delta());

    let firings = timer.0.times_finished_this_tick();
    if firings == 0 {
        return;
    }

    let next = effective_spawn_interval(&state, spawner.tunables.min_spawn_interval_ms, time.timestep());
    if timer.0.duration() != next {
        debug!("Spawn interval {:?} -> {:?}", timer.0.duration(), next);
        timer.0.set_duration(next);
    }

    let Ok(player_tf) = q_player.single() else {
        debug!("Spawn timer fired without a player; skipping batch");
        return;
    };
    let player = player_tf.translation.truncate();

    for _ in 0..firings {
        let kind = spawner.pick_kind(&mix);
        spawner.spawn_batch(state.enemies_per_batch, kind, player);
    }
}
