//! Reload coordination
//!
//! Tracks whether a bulk load is in flight and whether one has been asked
//! for. Queries consult the scheduler before touching the store and return
//! nothing while a load runs. Only the phase flags live behind the mutex; the
//! store itself is swapped wholesale by the load pass.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
}

/// What a query may do right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The store is stable
    Open,
    /// A load is in flight, answer with nothing
    Busy,
    /// A pending reload was just started by this call. The caller must run
    /// the load pass and answer with nothing.
    StartLoad,
}

#[derive(Debug)]
struct LoadState {
    phase: LoadPhase,
    reload_pending: bool,
}

#[derive(Debug)]
pub struct ReloadScheduler {
    state: Mutex<LoadState>,
    idle: Condvar,
}

impl Default for ReloadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadScheduler {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LoadState {
                phase: LoadPhase::Idle,
                reload_pending: false,
            }),
            idle: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enter `Loading` if idle. Clears any pending reload.
    /// Returns `false` when a load is already running.
    pub fn try_begin(&self) -> bool {
        let mut state = self.lock();
        Self::begin_locked(&mut state)
    }

    fn begin_locked(state: &mut LoadState) -> bool {
        if state.phase == LoadPhase::Loading {
            return false;
        }
        state.phase = LoadPhase::Loading;
        state.reload_pending = false;
        true
    }

    /// Return to `Idle` and wake waiters
    pub fn finish(&self) {
        let mut state = self.lock();
        state.phase = LoadPhase::Idle;
        drop(state);
        self.idle.notify_all();
    }

    /// Gate a query. Starts a pending reload if there is one.
    pub fn admit(&self) -> Admission {
        let mut state = self.lock();
        if state.reload_pending && Self::begin_locked(&mut state) {
            return Admission::StartLoad;
        }
        match state.phase {
            LoadPhase::Loading => Admission::Busy,
            LoadPhase::Idle => Admission::Open,
        }
    }

    pub fn set_requires_reload(&self, reload: bool) {
        self.lock().reload_pending = reload;
    }

    pub fn requires_reload(&self) -> bool {
        self.lock().reload_pending
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == LoadPhase::Loading
    }

    /// Park until no load is in flight
    pub fn wait_for_load(&self) {
        let state = self.lock();
        let _state = self
            .idle
            .wait_while(state, |s| s.phase == LoadPhase::Loading)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Park until no load is in flight or `timeout` elapses.
    /// Returns `true` if the scheduler is idle.
    pub fn wait_for_load_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut state = self.lock();
        while state.phase == LoadPhase::Loading {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            state = self
                .idle
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        true
    }
}

/// Calls [`ReloadScheduler::finish`] when dropped, so a failed or panicking
/// load pass still returns the scheduler to `Idle`
pub(crate) struct LoadGuard<'a>(pub(crate) &'a ReloadScheduler);

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}
