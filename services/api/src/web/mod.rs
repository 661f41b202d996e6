pub mod middleware;
pub mod rest;
pub mod state;

pub use middleware::{resolve_current_user, CurrentUser};
pub use rest::{
    list_bookmarks_handler, list_class_resources_handler, list_classes_handler,
    serve_resource_file_handler,
};

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware as axum_middleware,
    routing::get,
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Every endpoint is served below this prefix.
pub const API_PREFIX: &str = "/api";

/// Builds the API router: student-scoped routes behind the identity
/// middleware, the public file route, CORS for the configured origin, and
/// request tracing.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    // Only a request from the configured origin gets CORS headers back.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([app_state.config.cors_origin.clone()]))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // Routes that act on behalf of the current user
    let student_routes = Router::new()
        .route("/classes", get(list_classes_handler))
        .route(
            "/classes/{class_code}/resources",
            get(list_class_resources_handler),
        )
        .route("/bookmarks", get(list_bookmarks_handler))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            resolve_current_user,
        ));

    let file_routes =
        Router::new().route("/data/resources/{*filename}", get(serve_resource_file_handler));

    Router::new()
        .nest(API_PREFIX, student_routes.merge(file_routes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
