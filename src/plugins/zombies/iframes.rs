//! Invulnerability expiry schedule.
//!
//! Expiries are deadlines on the fixed clock, kept in a min-heap and drained at the start of
//! each simulation step. Each entry remembers the slot generation it was scheduled against;
//! once the slot has been recycled the entry is stale and is dropped without touching the
//! new occupant.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use bevy::prelude::*;

use super::components::{IFrames, SlotGeneration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PendingExpiry {
    at: Duration,
    entity: Entity,
    generation: u32,
}

#[derive(Resource, Debug, Default)]
pub struct IFrameSchedule {
    pending: BinaryHeap<Reverse<PendingExpiry>>,
}

impl IFrameSchedule {
    pub fn schedule(&mut self, entity: Entity, generation: SlotGeneration, at: Duration) {
        self.pending.push(Reverse(PendingExpiry {
            at,
            entity,
            generation: generation.0,
        }));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn pop_due(&mut self, now: Duration) -> Option<PendingExpiry> {
        if self.pending.peek().is_some_and(|Reverse(next)| next.at <= now) {
            self.pending.pop().map(|Reverse(due)| due)
        } else {
            None
        }
    }
}

/// Clear invulnerability for every window whose deadline has passed.
pub fn expire_iframes(
    time: Res<Time<Fixed>>,
    mut schedule: ResMut<IFrameSchedule>,
    mut q: Query<(&SlotGeneration, &mut IFrames)>,
) {
    let now = time.elapsed();

    while let Some(due) = schedule.pop_due(now) {
        let Ok((generation, mut iframes)) = q.get_mut(due.entity) else {
            continue;
        };

        if generation.0 != due.generation {
            trace!("Stale i-frame expiry for {:?} (gen {} != {})", due.entity, due.generation, generation.0);
            continue;
        }

        // A later, longer window on the same occupant owns the flag now.
        if iframes.invulnerable && iframes.expires_at <= due.at {
            iframes.clear();
        }
    }
}
