//! Counter Animation
//!
//! Animates a displayed integer from 0 up to a target. [`CounterPlan`] is the
//! pure frame schedule; [`Animator`] drives plans on tokio timers for the
//! native runtime, and the frontend drives the same plan from browser
//! intervals.

mod plan;
pub use plan::{CounterPlan, DEFAULT_DURATION, DEFAULT_TICK};

#[cfg(feature = "runtime")]
mod animator;
#[cfg(feature = "runtime")]
pub use animator::{AnimationHandle, Animator, CounterDisplay};
