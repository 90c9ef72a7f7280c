//! Example Service
//!
//! Input validation and entity-to-DTO translation for the example resource.
//! Storage operations are delegated to the repository; absence of an item
//! stays a return value (`None` / `false`) all the way up.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Example, ExamplePatch, ExampleRepository, ExampleStatus, NewExample};
use crate::shared::messages;

/// Example service trait
#[async_trait]
pub trait ExampleService: Send + Sync {
    /// All examples, mapped to response DTOs.
    async fn get_all(&self) -> Result<Vec<ExampleDto>, ExampleError>;

    /// Single example by ID; `None` when the ID does not resolve.
    async fn get_by_id(&self, id: &str) -> Result<Option<ExampleDto>, ExampleError>;

    /// Create a new example. Title and description must be non-empty.
    async fn create(&self, request: CreateExampleDto) -> Result<ExampleDto, ExampleError>;

    /// Apply a partial update; `None` when the ID does not resolve.
    async fn update(
        &self,
        id: &str,
        update: UpdateExampleDto,
    ) -> Result<Option<ExampleDto>, ExampleError>;

    /// Delete by ID; `false` when the ID does not resolve.
    async fn delete(&self, id: &str) -> Result<bool, ExampleError>;

    /// Number of stored examples.
    async fn count(&self) -> Result<usize, ExampleError>;
}

/// Create example request at the service boundary
#[derive(Debug, Clone)]
pub struct CreateExampleDto {
    pub title: String,
    pub description: String,
    pub status: ExampleStatus,
}

/// Partial update request at the service boundary
#[derive(Debug, Clone, Default)]
pub struct UpdateExampleDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ExampleStatus>,
}

/// Example data transfer object
///
/// Wire-shaped view of the entity: timestamps rendered to RFC 3339 strings,
/// status rendered to its string form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Example> for ExampleDto {
    fn from(example: Example) -> Self {
        Self {
            id: example.id,
            title: example.title,
            description: example.description,
            status: example.status.as_str().to_string(),
            created_at: example.created_at.to_rfc3339(),
            updated_at: example.updated_at.to_rfc3339(),
        }
    }
}

/// Example service errors
#[derive(Debug, thiserror::Error)]
pub enum ExampleError {
    /// The single business rule in the pipeline: title and description are
    /// required on create.
    #[error("{}", messages::REQUIRED_FIELDS)]
    MissingRequiredFields,

    #[error("{0}")]
    Internal(String),
}

/// ExampleService implementation
pub struct ExampleServiceImpl<R: ExampleRepository> {
    repository: Arc<R>,
}

impl<R: ExampleRepository> ExampleServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ExampleRepository + 'static> ExampleService for ExampleServiceImpl<R> {
    async fn get_all(&self) -> Result<Vec<ExampleDto>, ExampleError> {
        let items = self
            .repository
            .find_all()
            .await
            .map_err(|e| ExampleError::Internal(format!("항목 조회 실패: {e}")))?;

        Ok(items.into_iter().map(ExampleDto::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ExampleDto>, ExampleError> {
        let item = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| ExampleError::Internal(format!("항목 조회 실패: {e}")))?;

        Ok(item.map(ExampleDto::from))
    }

    async fn create(&self, request: CreateExampleDto) -> Result<ExampleDto, ExampleError> {
        if request.title.is_empty() || request.description.is_empty() {
            return Err(ExampleError::MissingRequiredFields);
        }

        let created = self
            .repository
            .create(NewExample {
                title: request.title,
                description: request.description,
                status: request.status,
            })
            .await
            .map_err(|e| ExampleError::Internal(format!("항목 생성 실패: {e}")))?;

        Ok(ExampleDto::from(created))
    }

    async fn update(
        &self,
        id: &str,
        update: UpdateExampleDto,
    ) -> Result<Option<ExampleDto>, ExampleError> {
        let updated = self
            .repository
            .update(
                id,
                ExamplePatch {
                    title: update.title,
                    description: update.description,
                    status: update.status,
                },
            )
            .await
            .map_err(|e| ExampleError::Internal(format!("항목 수정 실패: {e}")))?;

        Ok(updated.map(ExampleDto::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, ExampleError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| ExampleError::Internal(format!("항목 삭제 실패: {e}")))
    }

    async fn count(&self) -> Result<usize, ExampleError> {
        self.repository
            .count()
            .await
            .map_err(|e| ExampleError::Internal(format!("개수 조회 실패: {e}")))
    }
}
