//! E2E tests: registration and login.

use actix_web::http::StatusCode;
use actix_web::test;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_register_and_login() {
    let app = init_app().await;

    register_user(&app, "player1", "player1@example.com", "sekret-password").await;
    let token = login_user(&app, "player1", "sekret-password").await;

    assert!(token.starts_with("gshelf_"), "unexpected token: {}", token);
}

#[actix_rt::test]
async fn test_register_missing_field_is_400() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth/register")
        .set_json(serde_json::json!({
            "username": "player1",
            "password": "sekret-password",
            "email": "player1@example.com",
            "last_name": "User",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("missing value for first_name"),
        "unexpected body: {}",
        body
    );
}

#[actix_rt::test]
async fn test_register_duplicate_username_is_409() {
    let app = init_app().await;

    register_user(&app, "player1", "player1@example.com", "sekret-password").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth/register")
        .set_json(serde_json::json!({
            "username": "player1",
            "password": "other-password",
            "email": "other@example.com",
            "first_name": "Other",
            "last_name": "User",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_rt::test]
async fn test_register_duplicate_email_is_409() {
    let app = init_app().await;

    register_user(&app, "player1", "player1@example.com", "sekret-password").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth/register")
        .set_json(serde_json::json!({
            "username": "player2",
            "password": "other-password",
            "email": "player1@example.com",
            "first_name": "Other",
            "last_name": "User",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_rt::test]
async fn test_login_unknown_user_is_404() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth")
        .set_json(serde_json::json!({
            "username": "ghost",
            "password": "whatever",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_login_wrong_password_is_401() {
    let app = init_app().await;

    register_user(&app, "player1", "player1@example.com", "sekret-password").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth")
        .set_json(serde_json::json!({
            "username": "player1",
            "password": "wrong-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_login_missing_password_is_400() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth")
        .set_json(serde_json::json!({
            "username": "player1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

/// A second login replaces the token: the old one stops working.
#[actix_rt::test]
async fn test_relogin_invalidates_previous_token() {
    let app = init_app().await;

    register_user(&app, "player1", "player1@example.com", "sekret-password").await;
    let first = login_user(&app, "player1", "sekret-password").await;
    let second = login_user(&app, "player1", "sekret-password").await;
    assert_ne!(first, second);

    let resp = auth_get(&app, &first, "/api/v1/games").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = auth_get(&app, &second, "/api/v1/games").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
