//! Defense simulation engine - session state machine
//!
//! Coordinates the whole simulation on each tick:
//!
//! ```text
//! For each tick t (while Running):
//! 1. Count down remaining time
//! 2. Advance attack progression (RNG-gated, defense-dampened)
//! 3. Maybe synthesize an alert (RNG-gated)
//! 4. On expiry: freeze the session with its final score
//! 5. Deliver the resulting snapshot to subscribers
//! ```
//!
//! User actions (`start`, `toggle_defense`, `abort`) mutate the session
//! synchronously and deliver a snapshot the same way. All operations are
//! all-or-nothing: a rejected `start` leaves the session untouched.
//!
//! # Determinism
//!
//! All randomness flows through the injected [`RandomSource`]. Same seed +
//! same config + same action script = identical session history.
//!
//! # Example
//!
//! ```rust
//! use defense_simulator_core_rs::engine::SimulationEngine;
//! use defense_simulator_core_rs::models::config::{AttackType, Difficulty, SimulationConfig};
//!
//! let mut engine = SimulationEngine::new(12345);
//! let config = SimulationConfig::new(AttackType::Ddos, Difficulty::Medium, 60);
//!
//! let snapshot = engine.start(config).unwrap();
//! assert_eq!(snapshot.remaining_seconds, 60);
//!
//! let snapshot = engine.tick();
//! assert_eq!(snapshot.remaining_seconds, 59);
//! ```

use thiserror::Error;
use tracing::{debug, info};

use crate::alerts::AlertSynthesizer;
use crate::defenses;
use crate::engine::subscribers::{SubscriberRegistry, SubscriptionId};
use crate::models::alert::{AlertRecord, Severity};
use crate::models::config::SimulationConfig;
use crate::models::session::{SessionStatus, SimulationSession};
use crate::models::snapshot::Snapshot;
use crate::progression;
use crate::rng::{RandomSource, XorShiftRng};

/// The only user-facing failure: an operation that is not legal in the
/// current session state. Raised by `start()` while a session is Running;
/// every other malformed input is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a simulation is already running; abort it before starting another")]
pub struct InvalidStateError;

/// Session state machine owning the single [`SimulationSession`]
///
/// The engine is single-threaded and not reentrant; multi-threaded hosts
/// serialize access through
/// [`SimulationRunner`](crate::clock::runner::SimulationRunner).
pub struct SimulationEngine {
    /// The one mutable session (recreated by each successful start)
    session: SimulationSession,

    /// Injected randomness; all stochastic draws flow through here
    rng: Box<dyn RandomSource + Send>,

    /// Alert template sampler
    synthesizer: AlertSynthesizer,

    /// Snapshot listeners, notified after every tick and user action
    subscribers: SubscriberRegistry,
}

impl SimulationEngine {
    /// Create an engine with a seeded production RNG
    pub fn new(rng_seed: u64) -> Self {
        Self::with_rng(Box::new(XorShiftRng::new(rng_seed)))
    }

    /// Create an engine with an injected random source (tests, replay)
    pub fn with_rng(rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            session: SimulationSession::new(),
            rng,
            synthesizer: AlertSynthesizer::new(),
            subscribers: SubscriberRegistry::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Read-only view of the current session
    pub fn session(&self) -> &SimulationSession {
        &self.session
    }

    /// Mutable access to the current session
    ///
    /// # Safety
    ///
    /// This is primarily for testing. Direct session mutation bypasses
    /// the state machine's transitions. Use with caution.
    pub fn session_mut(&mut self) -> &mut SimulationSession {
        &mut self.session
    }

    /// Current snapshot, without notifying subscribers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.session)
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a snapshot listener
    ///
    /// The listener fires after every tick and every user action, in
    /// subscription order.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&Snapshot) + Send + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Remove a subscription; unknown or repeated ids are no-ops.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    // ========================================================================
    // User actions
    // ========================================================================

    /// Start a fresh session
    ///
    /// Allowed from Idle or Completed. Fails with [`InvalidStateError`]
    /// while Running (abort first); the in-flight session is untouched and
    /// subscribers are not notified on failure.
    pub fn start(&mut self, config: SimulationConfig) -> Result<Snapshot, InvalidStateError> {
        if self.session.status() == SessionStatus::Running {
            return Err(InvalidStateError);
        }

        let mut session = SimulationSession::begin(config);
        session.push_alert(start_alert(&config));
        self.session = session;

        info!(
            attack = config.attack_type.id(),
            difficulty = config.difficulty.id(),
            duration = config.duration_seconds,
            "simulation started"
        );
        Ok(self.emit())
    }

    /// Execute one simulation tick
    ///
    /// No-op unless Running. Counts down one second, advances attack
    /// progression, maybe synthesizes an alert, and on reaching zero
    /// freezes the session with its final score.
    pub fn tick(&mut self) -> Snapshot {
        if self.session.status() == SessionStatus::Running {
            // STEP 1: COUNTDOWN
            self.session.decrement_remaining();

            // STEP 2: ATTACK PROGRESSION
            let defended = !self.session.active_defenses().is_empty();
            let next = progression::advance(
                self.session.attack_progress(),
                defended,
                self.rng.as_mut(),
            );
            self.session.set_attack_progress(next);

            // STEP 3: ALERT SYNTHESIS
            let elapsed = self.session.elapsed_seconds();
            if let Some(alert) = self.synthesizer.maybe_synthesize(elapsed, self.rng.as_mut()) {
                self.session.push_alert(alert);
            }

            debug!(
                remaining = self.session.remaining_seconds(),
                progress = self.session.attack_progress(),
                "tick"
            );

            // STEP 4: EXPIRY
            if self.session.remaining_seconds() == 0 {
                self.complete();
            }
        }
        self.emit()
    }

    /// Toggle a defense on or off
    ///
    /// Only meaningful while Running; unknown ids and wrong states return
    /// the unchanged snapshot. Activation applies the defense's one-time
    /// penalty and raises an info alert; deactivation only removes the
    /// membership (the penalty is not reversed).
    pub fn toggle_defense(&mut self, id: &str) -> Snapshot {
        if self.session.status() != SessionStatus::Running {
            return self.emit();
        }
        let Some(def) = defenses::find(id) else {
            return self.emit();
        };

        if self.session.is_defense_active(def.id) {
            self.session.deactivate_defense(def.id);
            debug!(defense = def.id, "defense deactivated");
        } else {
            self.session.activate_defense(def.id);
            self.session
                .set_attack_progress(self.session.attack_progress() - def.activation_penalty);

            let elapsed = self.session.elapsed_seconds();
            self.session.push_alert(AlertRecord::new(
                format!("{} defense activated", def.display_name),
                Severity::Info,
                elapsed,
            ));
            debug!(
                defense = def.id,
                progress = self.session.attack_progress(),
                "defense activated"
            );
        }
        self.emit()
    }

    /// Abort the running session
    ///
    /// Scores the session from its current attack progress, exactly like
    /// natural expiry. No-op if not Running.
    pub fn abort(&mut self) -> Snapshot {
        if self.session.status() == SessionStatus::Running {
            debug!("abort requested");
            self.complete();
        }
        self.emit()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Freeze the session and record its score (shared exit path for
    /// expiry and abort).
    fn complete(&mut self) {
        let score = progression::defense_score(self.session.attack_progress());
        self.session.complete_with_score(score);
        info!(score, "simulation completed");
    }

    /// Snapshot the session and deliver it to all subscribers.
    fn emit(&self) -> Snapshot {
        let snapshot = self.snapshot();
        self.subscribers.notify(&snapshot);
        snapshot
    }
}

/// Lifecycle alert raised by a successful start.
fn start_alert(config: &SimulationConfig) -> AlertRecord {
    AlertRecord::new(
        format!(
            "{} attack simulation started",
            config.attack_type.id().to_uppercase()
        ),
        Severity::Info,
        0,
    )
}
