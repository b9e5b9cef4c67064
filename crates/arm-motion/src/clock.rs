use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Clock used to pace waypoint replay. `elapsed` is time since the clock was
/// created; `sleep_until` blocks until that offset has passed.
pub trait ReplayClock {
    fn elapsed(&self) -> Duration;

    fn sleep_until(&mut self, deadline: Duration);
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayClock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep_until(&mut self, deadline: Duration) {
        let now = self.elapsed();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

/// Test clock: advances instantly on `sleep_until` and records every
/// requested wakeup. Clones share state so a test can keep an observer.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    wakeups: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wakeups(&self) -> Vec<Duration> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).wakeups.clone()
    }
}

impl ReplayClock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).now
    }

    fn sleep_until(&mut self, deadline: Duration) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if deadline > state.now {
            state.now = deadline;
        }
        state.wakeups.push(deadline);
    }
}
