mod common;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{error_message, TestApp};
use noteful_server::db::DbError;
use noteful_server::models::{Folder, FolderPatch, NewFolder};
use noteful_server::{AppState, MemoryRepository, Repository};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn list_starts_empty() {
    let app = TestApp::new();
    let response = app.get("/api/folders").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn folder_lifecycle_end_to_end() {
    let app = TestApp::new();

    let created = app.post("/api/folders", json!({ "name": "Work" })).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.body, json!({ "id": id, "name": "Work" }));
    assert_eq!(created.location.as_deref(), Some(format!("/api/folders/{id}").as_str()));

    let uri = format!("/api/folders/{id}");
    let fetched = app.get(&uri).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let deleted = app.delete(&uri).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_null());

    let gone = app.get(&uri).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body, json!({ "error": { "message": "Folder not found" } }));
}

#[tokio::test]
async fn create_without_name_is_rejected_and_inserts_nothing() {
    let app = TestApp::new();

    for body in [json!({}), json!({ "name": "" }), json!({ "name": null })] {
        let response = app.post("/api/folders", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&response), "Name is required");
    }

    assert_eq!(app.get("/api/folders").await.body, json!([]));
}

#[tokio::test]
async fn create_without_json_content_type_reports_missing_name() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/folders")
        .body(Body::from("name=Work"))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response), "Name is required");
}

#[tokio::test]
async fn malformed_json_is_400_with_error_shape() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/folders")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response), "Malformed JSON body");
}

#[tokio::test]
async fn trailing_slash_routes_like_the_bare_path() {
    let app = TestApp::new();

    let created = app.post("/api/folders/", json!({ "name": "Work" })).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.location, Some(format!("/api/folders/{id}")));

    let listed = app.get("/api/folders/").await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body, json!([{ "id": id, "name": "Work" }]));

    let fetched = app.get(&format!("/api/folders/{id}/")).await;
    assert_eq!(fetched.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_404_with_error_shape() {
    let app = TestApp::new();
    let response = app.get("/api/nothing").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": { "message": "Route not found" } }));
}

#[tokio::test]
async fn list_escapes_markup() {
    let app = TestApp::new();
    app.post("/api/folders", json!({ "name": "<script>alert(1)</script>" }))
        .await;

    let response = app.get("/api/folders").await;
    let name = response.body[0]["name"].as_str().unwrap();
    assert_eq!(name, "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert!(!name.contains('<') && !name.contains('>'));
}

#[tokio::test]
async fn get_is_stable_across_reads() {
    let app = TestApp::new();
    app.post("/api/folders", json!({ "name": "<b>x</b>" })).await;

    let first = app.get("/api/folders/1").await;
    let second = app.get("/api/folders/1").await;
    assert_eq!(first.body, second.body);
    assert_eq!(first.body["name"], "&lt;b&gt;x&lt;/b&gt;");
}

#[tokio::test]
async fn delete_missing_folder_is_404() {
    let app = TestApp::new();
    let response = app.delete("/api/folders/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response), "Folder not found");
}

#[tokio::test]
async fn non_numeric_id_is_404() {
    let app = TestApp::new();
    let response = app.get("/api/folders/abc").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response), "Folder not found");
}

#[tokio::test]
async fn update_renames_folder() {
    let app = TestApp::new();
    app.post("/api/folders", json!({ "name": "Work" })).await;

    let response = app.patch("/api/folders/1", json!({ "name": "Home" })).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let fetched = app.get("/api/folders/1").await;
    assert_eq!(fetched.body, json!({ "id": 1, "name": "Home" }));
}

#[tokio::test]
async fn update_without_name_is_400() {
    let app = TestApp::new();
    app.post("/api/folders", json!({ "name": "Work" })).await;

    let response = app.patch("/api/folders/1", json!({ "title": "Home" })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response), "Request body must contain name");

    assert_eq!(app.get("/api/folders/1").await.body["name"], "Work");
}

#[tokio::test]
async fn update_missing_folder_is_404_before_body_check() {
    let app = TestApp::new();
    let response = app.patch("/api/folders/5", json!({})).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response), "Folder not found");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

/// Folder store whose every call fails, as an unreachable database would.
struct UnavailableFolders;

#[async_trait]
impl Repository<Folder> for UnavailableFolders {
    async fn list(&self) -> Result<Vec<Folder>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<Folder>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _new: NewFolder) -> Result<Folder, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn update_fields(&self, _id: i32, _patch: FolderPatch) -> Result<u64, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<u64, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[tokio::test]
async fn store_failures_become_generic_500() {
    let app = TestApp::with_state(AppState::from_parts(
        Arc::new(UnavailableFolders),
        Arc::new(MemoryRepository::new()),
    ));

    for response in [
        app.get("/api/folders").await,
        app.post("/api/folders", json!({ "name": "Work" })).await,
        app.get("/api/folders/1").await,
    ] {
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, json!({ "error": { "message": "server error" } }));
    }
}

#[tokio::test]
async fn validation_runs_before_the_store() {
    let app = TestApp::with_state(AppState::from_parts(
        Arc::new(UnavailableFolders),
        Arc::new(MemoryRepository::new()),
    ));

    let response = app.post("/api/folders", json!({})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response), "Name is required");
}
