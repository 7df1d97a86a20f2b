//! Simulation Session
//!
//! The single mutable aggregate of the engine. The session is owned
//! exclusively by the state machine; the display layer only ever sees
//! [`Snapshot`](crate::models::snapshot::Snapshot) copies.
//!
//! # Critical Invariants
//!
//! 1. `attack_progress` is clamped to [0, 100] after every mutation
//! 2. `remaining_seconds` only ever decreases while Running, down to 0
//! 3. `final_score` is `None` unless `status == Completed`, set exactly once
//! 4. `active_defenses` is a duplicate-free subset of the catalog ids
//! 5. `alert_log.len() <= ALERT_LOG_CAP`; oldest entries drop first

use serde::{Deserialize, Serialize};

use crate::models::alert::AlertRecord;
use crate::models::config::SimulationConfig;

/// Maximum number of alerts retained in the session log.
pub const ALERT_LOG_CAP: usize = 6;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No session has been started yet
    Idle,
    /// A session is in flight; ticks and toggles mutate it
    Running,
    /// Terminal until the next `start()`; the session is frozen
    Completed,
}

/// One run of the simulation, from `start()` to terminal `Completed`
///
/// All mutators preserve the invariants above; fields are private so the
/// only write paths are the state machine's operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSession {
    /// Lifecycle state
    status: SessionStatus,

    /// Config supplied at start (None only before the first start)
    config: Option<SimulationConfig>,

    /// Seconds left until natural expiry
    remaining_seconds: u32,

    /// How close the attacker is to success, 0..=100
    attack_progress: f64,

    /// Ids of currently active defenses, in activation order
    active_defenses: Vec<String>,

    /// Recent alerts, most-recent-last, capped at ALERT_LOG_CAP
    alert_log: Vec<AlertRecord>,

    /// Defense-effectiveness score, set once at completion
    final_score: Option<f64>,
}

impl SimulationSession {
    /// Create a pristine idle session (no config yet)
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            config: None,
            remaining_seconds: 0,
            attack_progress: 0.0,
            active_defenses: Vec::new(),
            alert_log: Vec::new(),
            final_score: None,
        }
    }

    /// Create a fresh Running session for the given config
    ///
    /// # Panics
    /// Panics if the config's duration is zero (bypassed constructor).
    pub(crate) fn begin(config: SimulationConfig) -> Self {
        assert!(
            config.duration_seconds > 0,
            "duration_seconds must be positive"
        );
        Self {
            status: SessionStatus::Running,
            remaining_seconds: config.duration_seconds,
            config: Some(config),
            attack_progress: 0.0,
            active_defenses: Vec::new(),
            alert_log: Vec::new(),
            final_score: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Lifecycle state
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Config supplied at start (None only before the first start)
    pub fn config(&self) -> Option<&SimulationConfig> {
        self.config.as_ref()
    }

    /// Seconds left until natural expiry
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Elapsed whole seconds since session start
    pub fn elapsed_seconds(&self) -> u32 {
        match &self.config {
            Some(config) => config.duration_seconds - self.remaining_seconds,
            None => 0,
        }
    }

    /// Attack progress, 0..=100
    pub fn attack_progress(&self) -> f64 {
        self.attack_progress
    }

    /// Ids of currently active defenses, in activation order
    pub fn active_defenses(&self) -> &[String] {
        &self.active_defenses
    }

    /// Whether the given defense id is currently active
    pub fn is_defense_active(&self, id: &str) -> bool {
        self.active_defenses.iter().any(|d| d == id)
    }

    /// Recent alerts, most-recent-last
    pub fn alert_log(&self) -> &[AlertRecord] {
        &self.alert_log
    }

    /// Defense-effectiveness score, present only once Completed
    pub fn final_score(&self) -> Option<f64> {
        self.final_score
    }

    // ========================================================================
    // Mutators (crate-internal except the clamped progress setter)
    // ========================================================================

    /// Set attack progress, clamped to [0, 100]
    ///
    /// Public so tests can place a session at a known progress point; the
    /// clamp keeps the invariant regardless of caller.
    pub fn set_attack_progress(&mut self, value: f64) {
        self.attack_progress = value.clamp(0.0, 100.0);
    }

    /// Count down one second (saturating at zero)
    pub(crate) fn decrement_remaining(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    }

    /// Append an alert, dropping the oldest entries beyond the cap
    pub(crate) fn push_alert(&mut self, alert: AlertRecord) {
        while self.alert_log.len() >= ALERT_LOG_CAP {
            self.alert_log.remove(0);
        }
        self.alert_log.push(alert);
    }

    /// Add a defense id to the active set (duplicate adds are no-ops)
    pub(crate) fn activate_defense(&mut self, id: &str) {
        if !self.is_defense_active(id) {
            self.active_defenses.push(id.to_string());
        }
    }

    /// Remove a defense id from the active set (absent ids are no-ops)
    pub(crate) fn deactivate_defense(&mut self, id: &str) {
        self.active_defenses.retain(|d| d != id);
    }

    /// Freeze the session with its final score
    pub(crate) fn complete_with_score(&mut self, score: f64) {
        debug_assert!(self.final_score.is_none(), "final score set twice");
        self.status = SessionStatus::Completed;
        self.final_score = Some(score);
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new()
    }
}
