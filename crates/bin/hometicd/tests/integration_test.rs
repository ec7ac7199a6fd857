//! End-to-end smoke tests for the full hometicd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! migrations, real pairing repository, real axum router) and exercises the
//! HTTP layer via `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use hometic_adapter_http_axum::router;
use hometic_adapter_http_axum::state::AppState;
use hometic_adapter_storage_sqlite_sqlx::{Config, PairRepository};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
///
/// The pool is returned too so tests can look at what was stored.
async fn app() -> (axum::Router, SqlitePool) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();
    let state = AppState::new(PairRepository::new(pool.clone()));

    (router::build(state), pool)
}

fn pair_device(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/pair-device")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn stored_pairs(pool: &SqlitePool) -> Vec<(i64, i64)> {
    sqlx::query_as("SELECT device_id, user_id FROM pairs")
        .fetch_all(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_store_pair_and_return_active() {
    let (app, pool) = app().await;

    let resp = app
        .oneshot(pair_device(r#"{"DeviceID":1234,"UserID":4433}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(body_string(resp).await, r#"{"status":"active"}"#);
    assert_eq!(stored_pairs(&pool).await, vec![(1234, 4433)]);
}

#[tokio::test]
async fn should_store_two_rows_when_same_pair_is_sent_twice() {
    let (app, pool) = app().await;

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(pair_device(r#"{"DeviceID":1,"UserID":2}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(stored_pairs(&pool).await, vec![(1, 2), (1, 2)]);
}

#[tokio::test]
async fn should_store_pair_when_keys_differ_in_case() {
    let (app, pool) = app().await;

    let resp = app
        .oneshot(pair_device(r#"{"deviceid":7,"userId":8,"device_id":9}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(stored_pairs(&pool).await, vec![(7, 8)]);
}

#[tokio::test]
async fn should_not_store_anything_when_body_is_invalid() {
    let (app, pool) = app().await;

    let resp = app
        .oneshot(pair_device(r#"{"DeviceID":"one"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert!(body.is_string(), "{body}");
    assert!(stored_pairs(&pool).await.is_empty());
}

#[tokio::test]
async fn should_return_store_error_when_insert_fails() {
    let (app, pool) = app().await;
    sqlx::query("DROP TABLE pairs").execute(&pool).await.unwrap();

    let resp = app
        .oneshot(pair_device(r#"{"DeviceID":1,"UserID":2}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    let message = body.as_str().unwrap();
    assert!(message.contains("no such table"), "{message}");
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_unknown_path() {
    let (app, _pool) = app().await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
