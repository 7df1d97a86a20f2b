//! Domain models for the defense simulation engine

pub mod alert;
pub mod config;
pub mod session;
pub mod snapshot;

// Re-exports
pub use alert::{AlertRecord, Severity};
pub use config::{AttackType, Difficulty, SimulationConfig};
pub use session::{SessionStatus, SimulationSession};
pub use snapshot::Snapshot;
