//! One-shot timers on the controller's millisecond clock.
//!
//! Every timer carries the round generation it was scheduled in. The
//! controller compares it with the current generation when the timer fires,
//! so a callback left over from an earlier round can never touch a newer one.

use crate::types::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Flip a mismatched pair back face down.
    MismatchRevert { tiles: [TileId; 2] },
    /// Leave the end screen and return to idle.
    AutoReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scheduled {
    pub due_ms: u64,
    pub generation: u32,
    pub task: TimerTask,
    seq: u64,
}

/// Pending timers, fired in `(due_ms, scheduling order)` order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, generation: u32, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending.push(Scheduled {
            due_ms,
            generation,
            task,
            seq,
        });
    }

    /// Earliest deadline, if any timer is pending.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|s| s.due_ms).min()
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Scheduled> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= now_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.seq))?;
        Some(self.pending.remove(idx))
    }

    /// Drop timers scheduled in any generation other than `generation`.
    pub fn retain_generation(&mut self, generation: u32) {
        self.pending.retain(|s| s.generation == generation);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
