//! Defense Catalog
//!
//! Static registry of the six operator-toggleable countermeasures. The
//! catalog is fixed at compile time and never mutated; the engine looks
//! entries up by id and the display layer renders the list as returned.

use serde::Serialize;

/// Single shared dampening multiplier applied to attack progression while
/// at least one defense is active. Defenses do not stack.
pub const SHARED_DAMPING_FACTOR: f64 = 0.5;

/// One-time attack-progress reduction applied when a defense is activated.
const ACTIVATION_PENALTY: f64 = 10.0;

/// An operator-toggleable countermeasure
///
/// `activation_penalty` is applied to attack progress once, on activation.
/// `damping_factor` is the multiplier on future progression increments
/// while the defense is active; every catalog entry shares
/// [`SHARED_DAMPING_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefenseDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    pub activation_penalty: f64,
    pub damping_factor: f64,
}

const fn defense(id: &'static str, display_name: &'static str) -> DefenseDefinition {
    DefenseDefinition {
        id,
        display_name,
        activation_penalty: ACTIVATION_PENALTY,
        damping_factor: SHARED_DAMPING_FACTOR,
    }
}

/// The fixed catalog, in display order.
static CATALOG: [DefenseDefinition; 6] = [
    defense("firewall", "Firewall Rules"),
    defense("intrusion-detection", "Intrusion Detection"),
    defense("antivirus", "Antivirus"),
    defense("web-app-firewall", "Web Application Firewall"),
    defense("dns-filtering", "DNS Filtering"),
    defense("multi-factor-auth", "Multi-Factor Auth"),
];

/// All available defenses, in display order. Static and unaffected by
/// session state.
pub fn catalog() -> &'static [DefenseDefinition] {
    &CATALOG
}

/// Look up a defense by id. Unknown ids return `None` (the engine treats
/// them as silent no-ops).
pub fn find(id: &str) -> Option<&'static DefenseDefinition> {
    CATALOG.iter().find(|d| d.id == id)
}
