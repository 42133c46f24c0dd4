//! HTTP-level integration tests for the `/user` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_returns_profile_without_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/user/create/",
        json!({
            "username": "ivan",
            "first_name": "Ivan",
            "last_name": "Petrov",
            "role": "moderator",
            "password": "secret",
            "age": 33,
            "location": "Moscow",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["username"], "ivan");
    assert_eq!(json["first_name"], "Ivan");
    assert_eq!(json["last_name"], "Petrov");
    assert_eq!(json["role"], "moderator");
    assert_eq!(json["age"], 33);
    assert_eq!(json["location"], "Moscow");
    assert!(json["location_id"].is_number());
    assert!(json.get("password").is_none());

    let id = json["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/user/{id}/")).await).await;
    assert_eq!(fetched, json);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_share_location_by_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = body_json(
        post_json(app, "/user/create/", json!({"username": "a", "location": "Omsk"})).await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let second = body_json(
        post_json(app, "/user/create/", json!({"username": "b", "location": "Omsk"})).await,
    )
    .await;

    assert_eq!(first["location_id"], second["location_id"]);

    let app = common::build_test_app(pool);
    let locations = body_json(get(app, "/loc/").await).await;
    assert_eq!(locations["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_defaults_role_and_allows_no_location(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(post_json(app, "/user/create/", json!({"username": "solo"})).await).await;

    assert_eq!(json["role"], "member");
    assert!(json["location"].is_null());
    assert!(json["location_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    common::create_user(&pool, "ivan").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/user/create/", json!({"username": "ivan"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_user_clears_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/user/create/",
            json!({
                "username": "ivan",
                "first_name": "Ivan",
                "last_name": "Petrov",
                "age": 33,
                "location": "Moscow",
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/user/{id}/update/"),
        json!({"first_name": "Vanya", "location": "Tula"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Vanya");
    assert!(json["last_name"].is_null());
    assert!(json["age"].is_null());
    assert_eq!(json["location"], "Tula");
    // Username and role are not touched by update.
    assert_eq!(json["username"], "ivan");
    assert_eq!(json["role"], "member");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/user/999999/update/", json!({"age": 1})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_list_reports_published_ads(pool: PgPool) {
    let category_id = common::create_category(&pool, "Cars").await;
    let ivan = common::create_user(&pool, "ivan").await;
    common::create_user(&pool, "olga").await;

    common::create_ad(&pool, ivan, category_id, "A", 10, true).await;
    common::create_ad(&pool, ivan, category_id, "B", 20, false).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/user/").await).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["number_of_pages"], 1);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["username"], "ivan");
    assert_eq!(items[0]["ads_published"], 1);
    assert_eq!(items[1]["username"], "olga");
    assert_eq!(items[1]["ads_published"], 0);
    assert!(items[0].get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_user_removes_their_ads(pool: PgPool) {
    let category_id = common::create_category(&pool, "Cars").await;
    let user_id = common::create_user(&pool, "ivan").await;
    let ad = common::create_ad(&pool, user_id, category_id, "Car", 100, true).await;
    let ad_id = ad["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/user/{user_id}/delete/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "OK");

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, &format!("/user/{user_id}/")).await.status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/ad/{ad_id}/")).await.status(),
        StatusCode::NOT_FOUND
    );
}
