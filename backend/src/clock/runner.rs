//! Runner - binds the engine to a tick source
//!
//! The engine's entry points are not independently reentrant; in a
//! threaded host (a clock worker plus a UI thread) they must be
//! serialized. The runner funnels everything through one mutex and keeps
//! exactly one clock attached while a session is Running, detaching it
//! synchronously on abort or natural completion.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::clock::{TickFlow, TickSource};
use crate::engine::machine::{InvalidStateError, SimulationEngine};
use crate::engine::subscribers::SubscriptionId;
use crate::models::config::SimulationConfig;
use crate::models::session::SessionStatus;
use crate::models::snapshot::Snapshot;

/// Mutex-guarded engine plus its single clock
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use defense_simulator_core_rs::clock::runner::SimulationRunner;
/// use defense_simulator_core_rs::clock::WallClock;
/// use defense_simulator_core_rs::engine::SimulationEngine;
/// use defense_simulator_core_rs::models::config::{AttackType, Difficulty, SimulationConfig};
///
/// let engine = SimulationEngine::new(42);
/// let mut runner = SimulationRunner::new(engine, WallClock::new());
///
/// runner.start(SimulationConfig::new(AttackType::Ddos, Difficulty::Medium, 60)).unwrap();
/// runner.toggle_defense("firewall");
/// let final_snapshot = runner.abort();
/// assert!(final_snapshot.final_score.is_some());
/// ```
pub struct SimulationRunner<C: TickSource> {
    engine: Arc<Mutex<SimulationEngine>>,
    clock: C,
}

impl<C: TickSource> SimulationRunner<C> {
    pub fn new(engine: SimulationEngine, clock: C) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            clock,
        }
    }

    /// Start a session and attach the clock
    ///
    /// The clock keeps ticking until the session leaves Running, then
    /// detaches itself. Starting again replaces any previous worker.
    pub fn start(&mut self, config: SimulationConfig) -> Result<Snapshot, InvalidStateError> {
        let snapshot = lock(&self.engine).start(config)?;

        let engine = Arc::clone(&self.engine);
        self.clock.start(Box::new(move || {
            let snapshot = lock(&engine).tick();
            if snapshot.status == SessionStatus::Running {
                TickFlow::Continue
            } else {
                TickFlow::Stop
            }
        }));

        Ok(snapshot)
    }

    /// Toggle a defense on the running session.
    pub fn toggle_defense(&self, id: &str) -> Snapshot {
        lock(&self.engine).toggle_defense(id)
    }

    /// Abort the session and synchronously detach the clock
    ///
    /// When this returns, no further tick can mutate the session (which is
    /// frozen anyway once Completed).
    pub fn abort(&mut self) -> Snapshot {
        let snapshot = lock(&self.engine).abort();
        self.clock.stop();
        snapshot
    }

    /// Current snapshot, without notifying subscribers.
    pub fn snapshot(&self) -> Snapshot {
        lock(&self.engine).snapshot()
    }

    /// Register a snapshot listener on the engine.
    pub fn subscribe(&self, listener: impl Fn(&Snapshot) + Send + 'static) -> SubscriptionId {
        lock(&self.engine).subscribe(listener)
    }

    /// Remove a subscription; unknown or repeated ids are no-ops.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        lock(&self.engine).unsubscribe(id);
    }

    /// Whether the clock currently has a live worker attached.
    pub fn clock_attached(&self) -> bool {
        self.clock.is_attached()
    }

    /// Mutable access to the clock (tests drive a [`ManualClock`](crate::clock::ManualClock) this way).
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

/// Lock the engine, recovering the guard if a panicking listener poisoned
/// the mutex.
fn lock(engine: &Arc<Mutex<SimulationEngine>>) -> MutexGuard<'_, SimulationEngine> {
    engine.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
