//! Attack Progression Model
//!
//! Pure per-tick math: one gating draw decides whether the attacker gains
//! ground this tick, a second draw sizes the gain. Active defenses dampen
//! the gain through the single shared factor; they do not stack.

use crate::defenses::SHARED_DAMPING_FACTOR;
use crate::rng::RandomSource;

/// An increment only occurs when the gating draw exceeds this (30% chance
/// per tick).
const INCREMENT_GATE: f64 = 0.7;

/// Maximum stochastic increment per tick, before damping.
const MAX_INCREMENT: f64 = 5.0;

/// Advance attack progress by one tick
///
/// Consumes one draw always (the gate) and a second draw only when the
/// gate is crossed. The result is clamped to [0, 100]: increments at 100
/// are absorbed, not rejected.
pub fn advance(progress: f64, defenses_active: bool, rng: &mut dyn RandomSource) -> f64 {
    let r1 = rng.next_f64();
    if r1 <= INCREMENT_GATE {
        return progress;
    }

    let damping = if defenses_active {
        SHARED_DAMPING_FACTOR
    } else {
        1.0
    };
    let increment = rng.next_f64() * MAX_INCREMENT * damping;

    (progress + increment).clamp(0.0, 100.0)
}

/// Final defense-effectiveness score for the given end-of-session progress.
///
/// Shared by natural expiry and abort: both exit paths score identically.
pub fn defense_score(attack_progress: f64) -> f64 {
    (100.0 - attack_progress).clamp(0.0, 100.0)
}
