#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use classifieds_api::config::ServerConfig;
use classifieds_api::router::build_app_router;
use classifieds_api::state::AppState;

/// Page size used by every test app; small so pagination is easy to hit.
pub const TEST_PAGE_SIZE: i64 = 3;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the given media root.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        page_size: TEST_PAGE_SIZE,
        media_root: media_root.to_path_buf(),
        media_url: "/media".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Uploads go to a throwaway directory.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, &std::env::temp_dir().join("classifieds-test-media"))
}

/// Same as [`build_test_app`] but with an explicit media root.
pub fn build_test_app_with_media(pool: PgPool, media_root: &Path) -> Router {
    let config = test_config(media_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(json.to_string()),
        Some("application/json"),
    )
    .await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::PATCH,
        uri,
        Body::from(json.to_string()),
        Some("application/json"),
    )
    .await
}

/// POST a multipart form with a single file field.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    data: &[u8],
) -> Response<Body> {
    const BOUNDARY: &str = "classifieds-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    send(app, Method::POST, uri, Body::from(body), Some(&content_type)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/cat/create/", serde_json::json!({ "name": name })).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a user through the API and return its id.
pub async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/user/create/",
        serde_json::json!({ "username": username, "password": "pw" }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an ad through the API and return the response JSON.
pub async fn create_ad(
    pool: &PgPool,
    author_id: i64,
    category_id: i64,
    name: &str,
    price: i32,
    is_published: bool,
) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/ad/create/",
        serde_json::json!({
            "name": name,
            "author_id": author_id,
            "category_id": category_id,
            "price": price,
            "description": "test",
            "is_published": is_published,
        }),
    )
    .await;
    body_json(response).await
}
