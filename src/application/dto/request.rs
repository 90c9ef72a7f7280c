//! Request DTOs
//!
//! Data structures for API request bodies and query parameters.

use serde::Deserialize;

use crate::domain::ExampleStatus;

/// Create example request
#[derive(Debug, Deserialize)]
pub struct CreateExampleRequest {
    pub title: String,
    pub description: String,
    pub status: ExampleStatus,
}

/// Update example request (partial patch)
#[derive(Debug, Deserialize, Default)]
pub struct UpdateExampleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ExampleStatus>,
}

/// Query parameters for the example endpoints
#[derive(Debug, Deserialize)]
pub struct ExampleQueryParams {
    pub id: Option<String>,
}
