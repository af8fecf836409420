//! Frame schedule for a single counter

use std::time::Duration;

use crate::format::prefixed;

/// Total animation time
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Interval between frames
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// Frames for counting from 0 to `target`.
///
/// Step `k` of `n` displays `floor(target * k / n)`; the final step displays
/// exactly `target`. Values never decrease and never overshoot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterPlan {
    target: u64,
    prefix: String,
    steps: u32,
    tick: Duration,
}

impl CounterPlan {
    /// Plan with the standard 2 s duration and 16 ms tick
    pub fn standard(target: u64, prefix: &str) -> Self {
        Self::new(target, prefix, DEFAULT_DURATION, DEFAULT_TICK)
    }

    pub fn new(target: u64, prefix: &str, duration: Duration, tick: Duration) -> Self {
        let steps = if target == 0 {
            0
        } else if tick.is_zero() {
            1
        } else {
            u32::try_from(duration.as_millis() / tick.as_millis().max(1))
                .unwrap_or(u32::MAX)
                .max(1)
        };

        Self {
            target,
            prefix: prefix.to_string(),
            steps,
            tick,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of timer ticks; 0 when the counter settles immediately
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// A zero target needs no timer
    pub fn is_instant(&self) -> bool {
        self.steps == 0
    }

    /// Value displayed after `step` ticks
    pub fn value_at(&self, step: u32) -> u64 {
        if step >= self.steps {
            return self.target;
        }
        ((self.target as u128 * step as u128) / self.steps as u128) as u64
    }

    /// Display text after `step` ticks
    pub fn frame(&self, step: u32) -> String {
        prefixed(&self.prefix, self.value_at(step))
    }

    /// Terminal display text
    pub fn final_frame(&self) -> String {
        prefixed(&self.prefix, self.target)
    }

    /// Every displayed frame in order, ending with the target
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        let first = if self.is_instant() { 0 } else { 1 };
        (first..=self.steps).map(move |step| self.frame(step))
    }
}
