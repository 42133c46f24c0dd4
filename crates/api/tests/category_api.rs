//! HTTP-level integration tests for the `/cat` and `/loc` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, TEST_PAGE_SIZE};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/cat/create/", json!({"name": "Cars"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Cars");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/cat/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": id, "name": "Cars"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/cat/999999/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_category_name(pool: PgPool) {
    let id = common::create_category(&pool, "Old").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/cat/{id}/update/"), json!({"name": "New"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "New");

    let app = common::build_test_app(pool);
    let response = patch_json(app, "/cat/999999/update/", json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_category_without_name_is_rejected(pool: PgPool) {
    let id = common::create_category(&pool, "Cars").await;

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/cat/{id}/update/"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_category_then_get_returns_404(pool: PgPool) {
    let id = common::create_category(&pool, "Temp").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/cat/{id}/delete/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "OK"}));

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/cat/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/cat/{id}/delete/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_list_is_paginated(pool: PgPool) {
    for name in ["A", "B", "C", "D", "E", "F", "G"] {
        common::create_category(&pool, name).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/cat/").await).await;
    assert_eq!(json["total"], 7);
    assert_eq!(json["number_of_pages"], 3);
    assert_eq!(json["items"].as_array().unwrap().len() as i64, TEST_PAGE_SIZE);
    assert_eq!(json["items"][0]["name"], "A");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/cat/?page=3").await).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "G");

    // Numbers naming no page go to the last one; garbage falls back to the first.
    for page in ["42", "0", "-1"] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(get(app, &format!("/cat/?page={page}")).await).await;
        assert_eq!(json["items"][0]["name"], "G", "page={page}");
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/cat/?page=first").await).await;
    assert_eq!(json["items"][0]["name"], "A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_category_list_has_one_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/cat/").await).await;
    assert_eq!(json, json!({"items": [], "total": 0, "number_of_pages": 1}));
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn location_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/loc/create/", json!({"name": "Moscow"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/loc/{id}/update/"), json!({"name": "Kazan"})).await;
    assert_eq!(body_json(response).await["name"], "Kazan");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/loc/").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["name"], "Kazan");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/loc/{id}/delete/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/loc/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
