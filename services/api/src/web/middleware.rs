//! services/api/src/web/middleware.rs
//!
//! Identity middleware for the student-scoped routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::web::state::AppState;

/// The user a request is served for, inserted into the request extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub String);

/// Middleware that resolves the current user and hands it to the handlers.
///
/// There is no session layer yet: every request is attributed to the configured
/// user id. Handlers only ever read `CurrentUser` from the extensions, so a real
/// identity check can replace this function without touching them.
pub async fn resolve_current_user(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let user = CurrentUser(state.config.current_user_id.clone());
    debug!(user_id = %user.0, "Resolved current user");

    req.extensions_mut().insert(user);
    next.run(req).await
}
