//! Timer-driven counter animation

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::MissedTickBehavior;

use super::plan::{CounterPlan, DEFAULT_DURATION, DEFAULT_TICK};

/// Target surface for counter frames, addressed by display key
pub trait CounterDisplay: Send + Sync + 'static {
    fn show(&self, key: &str, text: &str);
}

struct Running {
    generation: u64,
    abort: AbortHandle,
}

/// Runs counter animations, at most one per display key.
///
/// Starting a counter for a key that is still animating aborts the earlier
/// timer first. A finished animation removes its own timer.
pub struct Animator<D: CounterDisplay> {
    display: Arc<D>,
    duration: Duration,
    tick: Duration,
    running: Arc<Mutex<HashMap<String, Running>>>,
    generation: AtomicU64,
}

/// Handle to one started animation
pub struct AnimationHandle {
    key: String,
    join: JoinHandle<()>,
}

impl AnimationHandle {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Wait for the animation to reach its target or be cancelled
    pub async fn finished(self) {
        if let Err(e) = self.join.await {
            if !e.is_cancelled() {
                tracing::warn!(key = %self.key, error = %e, "Counter task failed");
            }
        }
    }

    pub fn abort(&self) {
        self.join.abort();
    }
}

impl<D: CounterDisplay> Animator<D> {
    pub fn new(display: Arc<D>) -> Self {
        Self::with_timing(display, DEFAULT_DURATION, DEFAULT_TICK)
    }

    pub fn with_timing(display: Arc<D>, duration: Duration, tick: Duration) -> Self {
        Self {
            display,
            duration,
            tick,
            running: Arc::new(Mutex::new(HashMap::new())),
            generation: AtomicU64::new(0),
        }
    }

    /// Animate `key` from 0 to `target`, replacing any animation in flight
    /// for the same key.
    pub fn animate(&self, key: &str, target: u64, prefix: &str) -> AnimationHandle {
        let plan = CounterPlan::new(target, prefix, self.duration, self.tick);
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;

        let display = Arc::clone(&self.display);
        let running = Arc::clone(&self.running);
        let task_key = key.to_string();

        // Hold the registry lock across spawn so a fast task cannot try to
        // deregister before it is registered.
        let mut registry = lock(&self.running);

        if let Some(prior) = registry.remove(key) {
            tracing::debug!(key = %key, "Cancelling in-flight counter");
            prior.abort.abort();
        }

        let join = tokio::spawn(async move {
            run(&plan, &task_key, display.as_ref()).await;

            let mut registry = lock(&running);
            if registry
                .get(&task_key)
                .is_some_and(|r| r.generation == generation)
            {
                registry.remove(&task_key);
            }
        });

        registry.insert(
            key.to_string(),
            Running {
                generation,
                abort: join.abort_handle(),
            },
        );

        AnimationHandle {
            key: key.to_string(),
            join,
        }
    }

    /// Stop the animation for `key`, leaving its last frame displayed
    pub fn cancel(&self, key: &str) -> bool {
        match lock(&self.running).remove(key) {
            Some(prior) => {
                prior.abort.abort();
                true
            }
            None => false,
        }
    }

    /// Number of animations whose timers are still live
    pub fn in_flight(&self) -> usize {
        lock(&self.running).len()
    }
}

impl<D: CounterDisplay> Drop for Animator<D> {
    fn drop(&mut self) {
        for (_, running) in lock(&self.running).drain() {
            running.abort.abort();
        }
    }
}

fn lock(running: &Mutex<HashMap<String, Running>>) -> std::sync::MutexGuard<'_, HashMap<String, Running>> {
    running.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

async fn run<D: CounterDisplay + ?Sized>(plan: &CounterPlan, key: &str, display: &D) {
    if plan.is_instant() {
        display.show(key, &plan.final_frame());
        return;
    }

    let mut ticker = tokio::time::interval(plan.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately
    ticker.tick().await;

    for step in 1..=plan.steps() {
        ticker.tick().await;
        display.show(key, &plan.frame(step));
    }

    tracing::debug!(key = %key, target = plan.target(), "Counter settled");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingDisplay {
        frames: Mutex<Vec<(String, String)>>,
    }

    impl RecordingDisplay {
        fn frames_for(&self, key: &str) -> Vec<String> {
            self.frames
                .lock()
                .unwrap()
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, t)| t.clone())
                .collect()
        }

        fn calls(&self) -> usize {
            self.frames.lock().unwrap().len()
        }
    }

    impl CounterDisplay for RecordingDisplay {
        fn show(&self, key: &str, text: &str) {
            self.frames
                .lock()
                .unwrap()
                .push((key.to_string(), text.to_string()));
        }
    }

    fn parse(text: &str) -> u64 {
        text.trim_start_matches('$').replace(',', "").parse().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_target_settles_at_zero() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        animator.animate("products", 0, "").finished().await;

        assert_eq!(display.frames_for("products"), vec!["0".to_string()]);
        assert_eq!(animator.in_flight(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaches_target_and_stops() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        animator.animate("users", 1250, "").finished().await;

        let frames = display.frames_for("users");
        assert_eq!(frames.last().map(String::as_str), Some("1,250"));
        assert_eq!(animator.in_flight(), 0);

        let calls = display.calls();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(display.calls(), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_takes_the_configured_duration() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        let start = tokio::time::Instant::now();
        animator.animate("users", 1250, "").finished().await;
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(1990));
        assert!(elapsed <= Duration::from_millis(2100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_frames_are_monotonic() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        animator.animate("revenue", 125_000, "$").finished().await;

        let values: Vec<u64> = display.frames_for("revenue").iter().map(|t| parse(t)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*values.last().unwrap(), 125_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reinvocation_cancels_prior_timer() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        let first = animator.animate("sessions", 1000, "");
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = animator.animate("sessions", 10, "");

        first.finished().await;
        second.finished().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        let frames = display.frames_for("sessions");
        assert_eq!(frames.last().map(String::as_str), Some("10"));
        assert!(!frames.iter().any(|f| f == "1,000"));
        assert_eq!(animator.in_flight(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_keys_run_together() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        let a = animator.animate("users", 1250, "");
        let b = animator.animate("products", 45, "");
        assert_eq!(animator.in_flight(), 2);

        a.finished().await;
        b.finished().await;

        assert_eq!(display.frames_for("users").last().map(String::as_str), Some("1,250"));
        assert_eq!(display.frames_for("products").last().map(String::as_str), Some("45"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_leaves_last_frame() {
        let display = Arc::new(RecordingDisplay::default());
        let animator = Animator::new(Arc::clone(&display));

        let handle = animator.animate("users", 1250, "");
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(animator.cancel("users"));
        handle.finished().await;

        let frames = display.frames_for("users");
        assert!(!frames.is_empty());
        assert_ne!(frames.last().map(String::as_str), Some("1,250"));
        assert!(!animator.cancel("users"));
    }
}
