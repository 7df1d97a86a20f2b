//! Snapshot - read-only session projection
//!
//! The only data format the display layer (tables, progress bars, alert
//! feed) may depend on. A snapshot is an owned copy: holding one never
//! grants access to engine-owned state.

use serde::{Deserialize, Serialize};

use crate::models::alert::AlertRecord;
use crate::models::config::SimulationConfig;
use crate::models::session::{SessionStatus, SimulationSession};

/// Read-only projection of a [`SimulationSession`]
///
/// Emitted to subscribers after every tick and every user action, and
/// returned from each engine entry point. Serializes to JSON for
/// out-of-process display layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: SessionStatus,
    pub config: Option<SimulationConfig>,
    pub remaining_seconds: u32,
    pub attack_progress: f64,
    pub active_defenses: Vec<String>,
    pub alert_log: Vec<AlertRecord>,
    pub final_score: Option<f64>,
}

impl From<&SimulationSession> for Snapshot {
    fn from(session: &SimulationSession) -> Self {
        Snapshot {
            status: session.status(),
            config: session.config().copied(),
            remaining_seconds: session.remaining_seconds(),
            attack_progress: session.attack_progress(),
            active_defenses: session.active_defenses().to_vec(),
            alert_log: session.alert_log().to_vec(),
            final_score: session.final_score(),
        }
    }
}
