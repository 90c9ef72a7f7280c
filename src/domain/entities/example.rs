//! Example entity and repository trait.
//!
//! The demonstration CRUD resource served under `/api/example`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Lifecycle status of an example item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExampleStatus {
    /// Visible and in use
    #[default]
    Active,
    /// Retained but switched off
    Inactive,
}

impl ExampleStatus {
    /// Convert from the wire string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "inactive" => Self::Inactive,
            _ => Self::Active,
        }
    }

    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ExampleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The stored record for the example resource.
///
/// Invariants: `id` is unique within the collection and immutable after
/// creation; `updated_at >= created_at` at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// Snowflake ID in string form (primary key)
    pub id: String,

    /// Item title (non-empty)
    pub title: String,

    /// Item description (non-empty)
    pub description: String,

    /// Lifecycle status
    pub status: ExampleStatus,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

impl Example {
    /// Check whether this item is active.
    pub fn is_active(&self) -> bool {
        matches!(self.status, ExampleStatus::Active)
    }
}

/// Fields required to create an example. IDs and timestamps are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewExample {
    pub title: String,
    pub description: String,
    pub status: ExampleStatus,
}

/// Partial update. Only the provided fields are applied; everything else
/// keeps its stored value.
#[derive(Debug, Clone, Default)]
pub struct ExamplePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ExampleStatus>,
}

/// Data-access contract for examples, implemented in the infrastructure
/// layer. Absence of an item is a return value here, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// All examples in insertion order.
    async fn find_all(&self) -> Result<Vec<Example>, AppError>;

    /// Find an example by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Example>, AppError>;

    /// Create a new example with a fresh ID and timestamps.
    async fn create(&self, data: NewExample) -> Result<Example, AppError>;

    /// Merge the patch over the stored entity; `None` when the ID is absent.
    async fn update(&self, id: &str, patch: ExamplePatch) -> Result<Option<Example>, AppError>;

    /// Remove an example; `false` when the ID is absent.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Number of stored examples.
    async fn count(&self) -> Result<usize, AppError>;
}
