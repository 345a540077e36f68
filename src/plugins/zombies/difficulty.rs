//! Difficulty ramp: elapsed minutes -> spawn parameters.
//!
//! The parameters are recomputed from `elapsed_minutes` alone every time, so the state for
//! minute `m` is reproducible from `m` and the base interval.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpawnState {
    pub spawn_interval_ms: f64,
    pub enemies_per_batch: u32,
    pub elapsed_minutes: u32,
    base_interval_ms: f64,
}

impl SpawnState {
    pub fn for_minutes(elapsed_minutes: u32, base_interval_ms: f64) -> Self {
        let divisor = f64::from(elapsed_minutes) + 1.0;
        Self {
            spawn_interval_ms: base_interval_ms / divisor,
            enemies_per_batch: elapsed_minutes.saturating_add(1),
            elapsed_minutes,
            base_interval_ms,
        }
    }

    pub fn new(base_interval_ms: f64) -> Self {
        Self::for_minutes(0, base_interval_ms)
    }

    pub fn on_minute_elapsed(&mut self) {
        *self = Self::for_minutes(self.elapsed_minutes.saturating_add(1), self.base_interval_ms);
    }

    #[inline]
    pub fn base_interval_ms(&self) -> f64 {
        self.base_interval_ms
    }
}

/// Repeating one-minute timer on the fixed clock.
#[derive(Resource, Debug, Clone)]
pub struct MinuteTracker(pub Timer);

impl MinuteTracker {
    pub fn new(minute_secs: f32) -> Self {
        Self(Timer::from_seconds(minute_secs.max(f32::EPSILON), TimerMode::Repeating))
    }
}

/// Advance the minute tracker; each elapsed minute steps the ramp once.
pub fn tick_difficulty_ramp(
    time: Res<Time<Fixed>>,
    mut tracker: ResMut<MinuteTracker>,
    mut state: ResMut<SpawnState>,
) {
    tracker.0.tick(time.delta());

    for _ in 0..tracker.0.times_finished_this_tick() {
        state.on_minute_elapsed();
        info!(
            "Difficulty ramp: minute {} -> {} per batch every {:.1}ms",
            state.elapsed_minutes, state.enemies_per_batch, state.spawn_interval_ms
        );
    }
}

