//! Example API Tests
//!
//! End-to-end tests for the `/api/example` CRUD pipeline.

use axum::http::StatusCode;
use chrono::DateTime;
use pretty_assertions::assert_eq;

use crate::common::{response_json, TestApp};

/// Create an item and return its envelope `data` object
async fn create_item(app: &TestApp, title: &str, description: &str) -> serde_json::Value {
    let body = format!(
        r#"{{"title":"{title}","description":"{description}","status":"active"}}"#
    );
    let response = app.post_json("/api/example", &body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["data"].clone()
}

#[tokio::test]
async fn test_get_all_returns_seeded_items() {
    let app = TestApp::new();

    let response = app.get("/api/example").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "항목 조회 성공");

    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "첫 번째 예제");
    assert_eq!(items[1]["title"], "두 번째 예제");
}

#[tokio::test]
async fn test_get_all_is_idempotent() {
    let app = TestApp::new();

    let first = response_json(app.get("/api/example").await).await;
    let second = response_json(app.get("/api/example").await).await;
    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn test_create_returns_created_item() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/example",
            r#"{"title":"A","description":"B","status":"active"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "항목 생성 성공");

    let data = &body["data"];
    assert!(!data["id"].as_str().unwrap().is_empty());
    assert_eq!(data["title"], "A");
    assert_eq!(data["description"], "B");
    assert_eq!(data["status"], "active");
    assert_eq!(data["createdAt"], data["updatedAt"]);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = TestApp::new();

    let created = create_item(&app, "왕복 테스트", "생성 후 조회").await;
    let id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/api/example?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let app = TestApp::new();

    let mut ids = std::collections::HashSet::new();
    for i in 0..5 {
        let data = create_item(&app, &format!("예제 {i}"), "설명").await;
        assert!(ids.insert(data["id"].as_str().unwrap().to_string()));
    }

    // New ids are also distinct from the seeded ones
    let all = response_json(app.get("/api/example").await).await;
    let items = all["data"].as_array().unwrap();
    assert_eq!(items.len(), 7);
    let unique: std::collections::HashSet<_> =
        items.iter().map(|item| item["id"].as_str().unwrap()).collect();
    assert_eq!(unique.len(), 7);
}

#[tokio::test]
async fn test_create_with_empty_title_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/example",
            r#"{"title":"","description":"B","status":"active"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "제목과 설명은 필수입니다");
    assert_eq!(body["message"], "유효성 검사 오류");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_create_with_empty_description_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/example",
            r#"{"title":"A","description":"","status":"active"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "제목과 설명은 필수입니다");
}

#[tokio::test]
async fn test_get_by_unknown_id_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/example?id=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "항목을 찾을 수 없습니다");
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let app = TestApp::new();

    let response = app.put_json("/api/example", r#"{"title":"수정"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "ID는 필수입니다");
}

#[tokio::test]
async fn test_update_unknown_id_returns_not_found() {
    let app = TestApp::new();

    let response = app
        .put_json("/api/example?id=999", r#"{"title":"수정"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_update_merges_partial_fields() {
    let app = TestApp::new();

    let created = create_item(&app, "원래 제목", "원래 설명").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .put_json(
            &format!("/api/example?id={id}"),
            r#"{"title":"수정된 제목"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "항목 수정 성공");

    let data = &body["data"];
    assert_eq!(data["title"], "수정된 제목");
    // Unspecified fields keep their prior values
    assert_eq!(data["description"], "원래 설명");
    assert_eq!(data["status"], "active");
    assert_eq!(data["createdAt"], created["createdAt"]);

    let before = DateTime::parse_from_rfc3339(created["updatedAt"].as_str().unwrap()).unwrap();
    let after = DateTime::parse_from_rfc3339(data["updatedAt"].as_str().unwrap()).unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn test_update_can_change_status() {
    let app = TestApp::new();

    let created = create_item(&app, "상태 변경", "설명").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .put_json(&format!("/api/example?id={id}"), r#"{"status":"inactive"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "inactive");
    assert_eq!(body["data"]["title"], "상태 변경");
}

#[tokio::test]
async fn test_delete_without_id_is_rejected() {
    let app = TestApp::new();

    let response = app.delete("/api/example").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "ID는 필수입니다");
}

#[tokio::test]
async fn test_delete_twice_returns_not_found_second_time() {
    let app = TestApp::new();

    let created = create_item(&app, "삭제 대상", "설명").await;
    let id = created["id"].as_str().unwrap();

    let response = app.delete(&format!("/api/example?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "항목 삭제 성공");
    assert_eq!(body["data"]["deleted"], true);

    // The item is gone: lookups and a second delete both miss
    let response = app.get(&format!("/api/example?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete(&format!("/api/example?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}
