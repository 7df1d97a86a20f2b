//! Session State Machine - engine entry points
//!
//! Owns the single simulation session and coordinates the progression
//! model, alert synthesizer, and subscriber delivery on each tick.
//!
//! See `machine.rs` for the state machine, `subscribers.rs` for snapshot
//! delivery.

pub mod machine;
pub mod subscribers;

// Re-export main types for convenience
pub use machine::{InvalidStateError, SimulationEngine};
pub use subscribers::SubscriptionId;
