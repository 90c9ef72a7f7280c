//! Example Handlers
//!
//! CRUD endpoints for the example resource. Each handler extracts the
//! request, runs the service, and wraps the outcome in the response
//! envelope; failures become `AppError`, which renders the same envelope
//! with `success:false`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::request::{
    CreateExampleRequest, ExampleQueryParams, UpdateExampleRequest,
};
use crate::application::dto::response::{ApiResponse, DeleteResponse, ExampleResponse};
use crate::application::services::{
    CreateExampleDto, ExampleError, ExampleService, ExampleServiceImpl, UpdateExampleDto,
};
use crate::shared::error::AppError;
use crate::shared::messages;
use crate::startup::AppState;

/// Convert a service failure into the boundary error type.
fn map_service_error(error: ExampleError) -> AppError {
    match &error {
        ExampleError::MissingRequiredFields => AppError::Validation(error.to_string()),
        ExampleError::Internal(_) => AppError::Internal(error.to_string()),
    }
}

/// Get all examples, or a single example when the `id` query parameter is
/// provided
pub async fn get_examples(
    State(state): State<AppState>,
    Query(params): Query<ExampleQueryParams>,
) -> Result<Response, AppError> {
    let service = ExampleServiceImpl::new(state.examples.clone());

    match params.id {
        Some(id) => {
            let item = service
                .get_by_id(&id)
                .await
                .map_err(map_service_error)?
                .ok_or_else(|| AppError::NotFound(messages::NOT_FOUND.into()))?;

            let body = ApiResponse::success(ExampleResponse::from(item), messages::FETCH_SUCCESS);
            Ok(Json(body).into_response())
        }
        None => {
            let items = service.get_all().await.map_err(map_service_error)?;
            let items: Vec<ExampleResponse> =
                items.into_iter().map(ExampleResponse::from).collect();

            let body = ApiResponse::success(items, messages::FETCH_SUCCESS);
            Ok(Json(body).into_response())
        }
    }
}

/// Create a new example
pub async fn create_example(
    State(state): State<AppState>,
    Json(body): Json<CreateExampleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ExampleResponse>>), AppError> {
    let service = ExampleServiceImpl::new(state.examples.clone());

    let created = service
        .create(CreateExampleDto {
            title: body.title,
            description: body.description,
            status: body.status,
        })
        .await
        .map_err(map_service_error)?;

    let body = ApiResponse::success(ExampleResponse::from(created), messages::CREATE_SUCCESS);
    Ok((StatusCode::CREATED, Json(body)))
}

/// Update an existing example
pub async fn update_example(
    State(state): State<AppState>,
    Query(params): Query<ExampleQueryParams>,
    Json(body): Json<UpdateExampleRequest>,
) -> Result<Json<ApiResponse<ExampleResponse>>, AppError> {
    // The id requirement is checked before the body is consulted.
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest(messages::ID_REQUIRED.into()))?;

    let service = ExampleServiceImpl::new(state.examples.clone());

    let updated = service
        .update(
            &id,
            UpdateExampleDto {
                title: body.title,
                description: body.description,
                status: body.status,
            },
        )
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| AppError::NotFound(messages::NOT_FOUND.into()))?;

    let body = ApiResponse::success(ExampleResponse::from(updated), messages::UPDATE_SUCCESS);
    Ok(Json(body))
}

/// Delete an example
pub async fn delete_example(
    State(state): State<AppState>,
    Query(params): Query<ExampleQueryParams>,
) -> Result<Json<ApiResponse<DeleteResponse>>, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest(messages::ID_REQUIRED.into()))?;

    let service = ExampleServiceImpl::new(state.examples.clone());

    let deleted = service.delete(&id).await.map_err(map_service_error)?;
    if !deleted {
        return Err(AppError::NotFound(messages::NOT_FOUND.into()));
    }

    let body = ApiResponse::success(DeleteResponse { deleted: true }, messages::DELETE_SUCCESS);
    Ok(Json(body))
}
