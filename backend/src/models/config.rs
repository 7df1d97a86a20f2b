//! Session configuration
//!
//! Immutable parameters supplied to `start()`. Attack type and difficulty
//! are scenario labels: the dashboard displays them and the start alert
//! names the attack, but neither alters the progression math.

use serde::{Deserialize, Serialize};

/// Duration presets offered by the dashboard, in seconds.
///
/// The engine itself accepts any positive duration; this list exists for
/// the configuration menu of the display layer.
pub const DURATION_CHOICES: [u32; 3] = [60, 120, 300];

/// Attack scenario simulated during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Ddos,
    Ransomware,
    SqlInjection,
    Phishing,
}

impl AttackType {
    /// Stable string id, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            AttackType::Ddos => "ddos",
            AttackType::Ransomware => "ransomware",
            AttackType::SqlInjection => "sqlinjection",
            AttackType::Phishing => "phishing",
        }
    }
}

/// Scenario difficulty label.
///
/// Recorded in the config and echoed in snapshots; the engine does not
/// consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Stable string id, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Nightmare => "nightmare",
        }
    }
}

/// Immutable configuration for one simulation session
///
/// # Example
/// ```
/// use defense_simulator_core_rs::models::config::{AttackType, Difficulty, SimulationConfig};
///
/// let config = SimulationConfig::new(AttackType::Ddos, Difficulty::Medium, 120);
/// assert_eq!(config.duration_seconds, 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Attack scenario to simulate
    pub attack_type: AttackType,

    /// Scenario difficulty label
    pub difficulty: Difficulty,

    /// Session length in whole seconds (one tick per second)
    pub duration_seconds: u32,
}

impl SimulationConfig {
    /// Create a validated configuration
    ///
    /// # Panics
    /// Panics if `duration_seconds` is zero.
    pub fn new(attack_type: AttackType, difficulty: Difficulty, duration_seconds: u32) -> Self {
        assert!(duration_seconds > 0, "duration_seconds must be positive");
        Self {
            attack_type,
            difficulty,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "duration_seconds must be positive")]
    fn test_zero_duration_panics() {
        SimulationConfig::new(AttackType::Phishing, Difficulty::Easy, 0);
    }

    #[test]
    fn test_attack_type_serialized_ids() {
        for (attack, id) in [
            (AttackType::Ddos, "ddos"),
            (AttackType::Ransomware, "ransomware"),
            (AttackType::SqlInjection, "sqlinjection"),
            (AttackType::Phishing, "phishing"),
        ] {
            assert_eq!(attack.id(), id);
        }
    }

    #[test]
    fn test_duration_choices_are_valid() {
        for duration in DURATION_CHOICES {
            // Constructor must accept every preset
            SimulationConfig::new(AttackType::Ddos, Difficulty::Medium, duration);
        }
    }
}
