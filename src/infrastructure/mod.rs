//! Infrastructure Layer
//!
//! Concrete implementations behind the domain contracts: the in-memory
//! store and the metrics registry.

pub mod metrics;
pub mod repositories;
