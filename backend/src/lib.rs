//! Defense Simulation Engine - Cyber Range Core
//!
//! Models an ongoing attack countered by operator-activated defenses,
//! emits synthetic alerts, and produces a final score. The engine is the
//! only stateful subsystem of the range dashboard; everything visual
//! consumes its snapshots.
//!
//! # Architecture
//!
//! - **models**: Domain types (config, session, alerts, snapshot)
//! - **defenses**: Static catalog of toggleable countermeasures
//! - **progression**: Per-tick attack progression math
//! - **alerts**: Synthetic alert generation
//! - **engine**: Session state machine and subscriptions
//! - **clock**: Tick sources and the threaded runner
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Attack progress is clamped to [0, 100] after every mutation
//! 2. All randomness is deterministic (injected, seeded RNG)
//! 3. The display layer only ever receives immutable snapshots

// Module declarations
pub mod alerts;
pub mod clock;
pub mod defenses;
pub mod engine;
pub mod models;
pub mod progression;
pub mod rng;

// Re-exports for convenience
pub use clock::runner::SimulationRunner;
pub use clock::{ManualClock, TickFlow, TickSource, WallClock};
pub use defenses::{catalog, DefenseDefinition};
pub use engine::{InvalidStateError, SimulationEngine, SubscriptionId};
pub use models::{
    alert::{AlertRecord, Severity},
    config::{AttackType, Difficulty, SimulationConfig, DURATION_CHOICES},
    session::{SessionStatus, SimulationSession, ALERT_LOG_CAP},
    snapshot::Snapshot,
};
pub use rng::{FixedRng, RandomSource, SequenceRng, XorShiftRng};
