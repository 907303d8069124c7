#![allow(dead_code)]

//! Test infrastructure for tb-server API tests

use tb_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = tb_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    tb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Router over a fresh database
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = create_test_pool().await;
    (build_router(AppState::new(pool.clone())), pool)
}

/// Send one request through a clone of the router
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Send a raw body with a JSON content type
pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// POST /projects and return the created project JSON
pub async fn create_project(app: &Router, name: &str) -> Value {
    let response = send(app, "POST", "/projects", Some(serde_json::json!({ "name": name }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}

/// POST a task and return the created task JSON
pub async fn create_task(app: &Router, project_id: &str, body: Value) -> Value {
    let uri = format!("/projects/{}/tasks", project_id);
    let response = send(app, "POST", &uri, Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}
