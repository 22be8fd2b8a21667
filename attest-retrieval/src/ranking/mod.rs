//! Post-fusion arbitration: trust (source tier) dominates relevance (RRF score).

pub mod tier_resolver;

pub use tier_resolver::SourcePriorityResolver;
