use crate::request_logging::{handle_panic, log_requests};
use crate::{
    AppState, create_project, create_task, delete_task, get_task, health, list_projects,
    list_tasks, update_task,
};

use axum::{Router, middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}/tasks",
            get(list_tasks).post(create_task),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
        // Innermost, so the access log sees the 500
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
