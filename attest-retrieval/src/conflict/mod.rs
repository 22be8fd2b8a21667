//! Conflict flagging between candidates that share a service category.

pub mod detector;
pub mod fact_mismatch;

pub use detector::ConflictDetector;
pub use fact_mismatch::FactMismatchPredicate;
