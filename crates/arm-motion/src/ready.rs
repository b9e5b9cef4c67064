use std::sync::{Arc, Condvar, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Ready,
    Abandoned,
}

struct Shared {
    state: Mutex<State>,
    cv: Condvar,
}

/// One-shot readiness signal: initialization calls `ready()` when done,
/// dispatchers `wait()` on the gate.
///
/// Dropping an unfired signal marks the gate abandoned so waiters do not
/// block forever on an initialization that died.
pub struct ReadySignal {
    shared: Arc<Shared>,
}

impl ReadySignal {
    pub fn ready(self) {
        self.fire(State::Ready);
    }

    fn fire(&self, state: State) {
        let mut guard = self.shared.state.lock().unwrap_or_else(|e| e.into_inner());
        if *guard == State::Pending {
            *guard = state;
            self.shared.cv.notify_all();
        }
    }
}

impl Drop for ReadySignal {
    fn drop(&mut self) {
        self.fire(State::Abandoned);
    }
}

#[derive(Clone)]
pub struct ReadyGate {
    shared: Arc<Shared>,
}

impl ReadyGate {
    /// Block until the signal fires or is dropped. Returns `true` only when
    /// initialization completed.
    pub fn wait(&self) -> bool {
        let guard = self.shared.state.lock().unwrap_or_else(|e| e.into_inner());
        let guard = self
            .shared
            .cv
            .wait_while(guard, |state| *state == State::Pending)
            .unwrap_or_else(|e| e.into_inner());
        *guard == State::Ready
    }

    pub fn is_ready(&self) -> bool {
        *self.shared.state.lock().unwrap_or_else(|e| e.into_inner()) == State::Ready
    }
}

pub fn readiness() -> (ReadySignal, ReadyGate) {
    let shared = Arc::new(Shared {
        state: Mutex::new(State::Pending),
        cv: Condvar::new(),
    });
    (
        ReadySignal {
            shared: shared.clone(),
        },
        ReadyGate { shared },
    )
}
