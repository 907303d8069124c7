use crate::ApiError;

use tb_core::normalize_project_name;
use tb_db::DbError;
use tb_service::ServiceError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn json_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "task not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "task not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_bad_request_returns_400_without_field() {
    let error = ApiError::BadRequest {
        message: "Invalid JSON body".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_service_validation_error_maps_to_400_with_field() {
    let core = normalize_project_name("").unwrap_err();
    let response = ApiError::from(ServiceError::from(core)).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "project name is required");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_project_not_found_maps_to_404() {
    let error = ServiceError::ProjectNotFound {
        project_id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = ApiError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error"]["message"], "project not found");
}

#[tokio::test]
async fn test_duplicate_name_maps_to_409() {
    let error = ServiceError::ProjectNameExists {
        name: "Alpha".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = ApiError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_storage_failure_maps_to_500_without_details() {
    let error = ServiceError::from(DbError::Decode {
        message: "Invalid UUID in tasks.id".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let response = ApiError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "internal server error");
}

#[test]
fn test_uuid_error_maps_to_bad_request() {
    let error: ApiError = Uuid::parse_str("not-a-uuid").unwrap_err().into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(error, ApiError::BadRequest { .. }));
}

#[test]
fn test_storage_failure_is_not_logged_again_at_response_time() {
    let error = ApiError::from(ServiceError::from(DbError::Decode {
        message: "Invalid UUID in tasks.id".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    assert_eq!(error.log_level(), None);
}

#[test]
fn test_client_errors_are_logged_as_warnings() {
    let error = ApiError::NotFound {
        message: "task not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(error.log_level(), Some(log::Level::Warn));
}
