//! Example Repository Implementation
//!
//! In-memory implementation of the `ExampleRepository` trait. This is the
//! sole owner of the entity collection; it performs raw CRUD and no business
//! validation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{Example, ExamplePatch, ExampleRepository, ExampleStatus, NewExample};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// In-memory example store.
///
/// Entities live in an insertion-ordered list behind a single lock. Every
/// find-then-mutate sequence holds the write lock for the whole operation,
/// so interleaved requests cannot observe a half-applied mutation.
///
/// Storage is process-local and ephemeral: constructed (and optionally
/// seeded) at startup, gone on restart. Tests construct their own instances.
pub struct InMemoryExampleRepository {
    items: RwLock<Vec<Example>>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl InMemoryExampleRepository {
    /// Create an empty store.
    pub fn new(id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            id_generator,
        }
    }

    /// Create a store pre-populated with the two template entries.
    pub fn seeded(id_generator: Arc<SnowflakeGenerator>) -> Self {
        let repository = Self::new(id_generator);
        {
            let mut items = repository.items.write();
            for (title, description) in [
                ("첫 번째 예제", "이것은 첫 번째 예제입니다."),
                ("두 번째 예제", "이것은 두 번째 예제입니다."),
            ] {
                let now = Utc::now();
                items.push(Example {
                    id: repository.id_generator.generate_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    status: ExampleStatus::Active,
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        repository
    }
}

#[async_trait]
impl ExampleRepository for InMemoryExampleRepository {
    /// Snapshot of all examples in insertion order.
    async fn find_all(&self) -> Result<Vec<Example>, AppError> {
        Ok(self.items.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Example>, AppError> {
        Ok(self.items.read().iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, data: NewExample) -> Result<Example, AppError> {
        let mut items = self.items.write();
        let now = Utc::now();
        let item = Example {
            id: self.id_generator.generate_string(),
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &str, patch: ExamplePatch) -> Result<Option<Example>, AppError> {
        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(status) = patch.status {
            item.status = status;
        }
        item.updated_at = Utc::now();

        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut items = self.items.write();
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.items.read().len())
    }
}
