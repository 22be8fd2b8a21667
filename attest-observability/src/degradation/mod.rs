//! Degradation tracking and alerting for retrieval components.

pub mod alerting;
pub mod tracker;

pub use alerting::{evaluate_alerts, AlertLevel, DegradationAlert};
pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};
