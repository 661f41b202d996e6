//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::{middleware::CurrentUser, state::AppState};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    Extension,
};
use class_resources_core::{
    domain::{BookmarkedResource, ClassSummary, Resource},
    ports::PortError,
    service,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_classes_handler,
        list_class_resources_handler,
        list_bookmarks_handler,
        serve_resource_file_handler,
    ),
    components(
        schemas(ClassSummaryResponse, ErrorResponse)
    ),
    tags(
        (name = "Class Resources API", description = "Read-only access to a student's classes, shared materials and bookmarks.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

/// One enrolled class in the `/classes` listing.
#[derive(Serialize, ToSchema)]
pub struct ClassSummaryResponse {
    code: String,
    #[schema(value_type = String)]
    name: Value,
    item_count: usize,
}

impl From<ClassSummary> for ClassSummaryResponse {
    fn from(summary: ClassSummary) -> Self {
        Self {
            code: summary.code,
            name: summary.name,
            item_count: summary.item_count,
        }
    }
}

/// The body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    error: String,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

/// Translates a port failure into its HTTP status and error body.
fn error_reply(err: PortError) -> ErrorReply {
    let (status, message) = match err {
        PortError::Unauthorized => (StatusCode::FORBIDDEN, "Unauthorized access".to_string()),
        PortError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        PortError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        PortError::Unexpected(message) => {
            error!("Request failed: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    (status, Json(ErrorResponse { error: message }))
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List the classes the current user is enrolled in.
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "Enrolled classes with their resource counts", body = Vec<ClassSummaryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_classes_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ClassSummaryResponse>>, ErrorReply> {
    let classes = service::list_classes_for_user(state.catalog.as_ref(), &user.0)
        .await
        .map_err(error_reply)?;

    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

/// List the resources shared in a class.
///
/// Only available for classes the current user is enrolled in.
#[utoipa::path(
    get,
    path = "/api/classes/{class_code}/resources",
    params(
        ("class_code" = String, Path, description = "Code of the class, e.g. CS101.")
    ),
    responses(
        (status = 200, description = "Every resource of the class, in dataset order"),
        (status = 403, description = "The current user is not enrolled in the class", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_class_resources_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(class_code): Path<String>,
) -> Result<Json<Vec<Resource>>, ErrorReply> {
    let resources = service::list_class_resources(state.catalog.as_ref(), &user.0, &class_code)
        .await
        .map_err(|e| {
            if matches!(e, PortError::Unauthorized) {
                warn!(user_id = %user.0, "Denied access to class {}", class_code);
            }
            error_reply(e)
        })?;

    Ok(Json(resources))
}

/// List the current user's bookmarked resources.
#[utoipa::path(
    get,
    path = "/api/bookmarks",
    responses(
        (status = 200, description = "Bookmarked resources, each with a `bookmarked_at` timestamp"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_bookmarks_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<BookmarkedResource>>, ErrorReply> {
    let bookmarks = service::list_bookmarks_for_user(state.catalog.as_ref(), &user.0)
        .await
        .map_err(error_reply)?;

    Ok(Json(bookmarks))
}

/// Download a resource file.
///
/// The content type is chosen from the file extension.
#[utoipa::path(
    get,
    path = "/api/data/resources/{filename}",
    params(
        ("filename" = String, Path, description = "Path of the file inside the resources directory.")
    ),
    responses(
        (status = 200, description = "The file contents"),
        (status = 400, description = "Invalid filename", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
pub async fn serve_resource_file_handler(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ErrorReply> {
    let file = service::open_resource_file(state.files.as_ref(), &filename)
        .await
        .map_err(|e| {
            warn!("Cannot serve '{}': {}", filename, e);
            error_reply(e)
        })?;

    info!("Serving '{}' ({} bytes, {})", filename, file.size, file.content_type);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_LENGTH, file.size.to_string()),
        ],
        Body::from_stream(file.body),
    )
        .into_response())
}
