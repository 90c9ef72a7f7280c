//! # Domain Layer
//!
//! Core business types, independent of frameworks and infrastructure.
//! Repository traits define data access contracts; entities carry the
//! invariants the rest of the system relies on.

pub mod entities;

pub use entities::*;
