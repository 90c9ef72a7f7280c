//! Application Services
//!
//! Business logic services that coordinate domain operations.

pub mod example_service;

pub use example_service::{
    CreateExampleDto, ExampleDto, ExampleError, ExampleService, ExampleServiceImpl,
    UpdateExampleDto,
};
