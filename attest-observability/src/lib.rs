//! # attest-observability
//!
//! Structured tracing setup with one log function per notable engine event,
//! plus degradation tracking with alerting for retrievers that keep failing.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{evaluate_alerts, AlertLevel, DegradationAlert, DegradationTracker};
