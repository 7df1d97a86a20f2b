//! Synthetic alert records
//!
//! Alerts are display notifications appended to the session's bounded
//! recent-history log. They are immutable once created.

use serde::{Deserialize, Serialize};

/// Alert severity, ordered from routine to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

/// A synthesized security alert
///
/// Immutable once created. The `tick` field is the number of elapsed whole
/// seconds since session start at the moment of synthesis; formatting it as
/// wall-clock time is a display concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Unique record identifier (identity only, not used by the engine)
    id: String,

    /// Alert text, drawn from the fixed template catalog or a lifecycle
    /// message ("... attack simulation started", "... defense activated")
    message: String,

    /// Severity classification
    severity: Severity,

    /// Elapsed seconds since session start when the alert was raised
    tick: u32,
}

impl AlertRecord {
    /// Create a new alert record with a fresh identity
    pub fn new(message: String, severity: Severity, tick: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message,
            severity,
            tick,
        }
    }

    /// Unique record identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Alert text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity classification
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Elapsed seconds since session start when the alert was raised
    pub fn tick(&self) -> u32 {
        self.tick
    }
}
