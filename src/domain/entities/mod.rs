//! # Domain Entities
//!
//! Core entities for the template's demonstration resource, together with
//! the repository traits that define their data-access contracts. The traits
//! are implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod example;

pub use example::{Example, ExamplePatch, ExampleRepository, ExampleStatus, NewExample};

#[cfg(test)]
pub use example::MockExampleRepository;
