//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits. The template
//! ships a single in-memory store; swapping in a database-backed
//! implementation means implementing the same trait against a pool.

pub mod example_repository;

pub use example_repository::InMemoryExampleRepository;
