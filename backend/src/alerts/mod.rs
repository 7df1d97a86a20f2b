//! Alert Synthesizer
//!
//! Produces at most one synthetic alert per tick from a fixed template
//! catalog. Draw order is fixed (gate, severity, message) so a seeded
//! session replays to an identical alert feed.

use crate::models::alert::{AlertRecord, Severity};
use crate::rng::RandomSource;

/// An alert is only synthesized when the gating draw exceeds this (15%
/// chance per tick).
const ALERT_GATE: f64 = 0.85;

/// Severity thresholds on a single draw, exclusive lower bounds:
/// above 0.8 → Danger (20%), else above 0.6 → Warning (20%), else Info (60%).
const DANGER_THRESHOLD: f64 = 0.8;
const WARNING_THRESHOLD: f64 = 0.6;

/// Message templates, sampled uniformly.
const TEMPLATES: [&str; 5] = [
    "Suspicious login attempt detected",
    "Port scan detected from 192.168.1.100",
    "Unusual outbound traffic detected",
    "Multiple authentication failures",
    "Possible data exfiltration attempt",
];

/// Synthesizes alert records from the template catalog
///
/// Stateless: the engine feeds it the shared RNG and the current elapsed
/// tick; it returns at most one record per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertSynthesizer;

impl AlertSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Roll for an alert at the given elapsed tick
    ///
    /// Consumes one draw for the gate, and two more (severity, message)
    /// only when the gate is crossed.
    pub fn maybe_synthesize(
        &self,
        tick: u32,
        rng: &mut dyn RandomSource,
    ) -> Option<AlertRecord> {
        let r = rng.next_f64();
        if r <= ALERT_GATE {
            return None;
        }

        let severity = draw_severity(rng);
        let message = draw_message(rng);
        Some(AlertRecord::new(message.to_string(), severity, tick))
    }
}

fn draw_severity(rng: &mut dyn RandomSource) -> Severity {
    let r = rng.next_f64();
    if r > DANGER_THRESHOLD {
        Severity::Danger
    } else if r > WARNING_THRESHOLD {
        Severity::Warning
    } else {
        Severity::Info
    }
}

fn draw_message(rng: &mut dyn RandomSource) -> &'static str {
    // next_f64() < 1.0, so the index stays in range
    let idx = (rng.next_f64() * TEMPLATES.len() as f64) as usize;
    TEMPLATES[idx]
}
