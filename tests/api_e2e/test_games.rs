//! E2E tests: game listing, filtering, pagination, creation, detail.

use actix_web::http::StatusCode;
use actix_web::test;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_list_games_requires_auth() {
    let app = init_app().await;

    let req = test::TestRequest::get().uri("/api/v1/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_list_games_rejects_bad_token() {
    let app = init_app().await;

    let resp = auth_get(&app, "gshelf_not_a_real_token", "/api/v1/games").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_list_games_rejects_wrong_scheme() {
    let app = init_app().await;

    let token = signup(&app, "player1").await;
    let req = test::TestRequest::get()
        .uri("/api/v1/games")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_empty_catalog_is_empty_200() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    let resp = auth_get(&app, &token, "/api/v1/games").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 0);
    assert!(body["next"].is_null());
    assert!(body["previous"].is_null());
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_create_and_get_game() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    let id = create_game(&app, &token, "Baldur's Gate II", 2000, "RPG", "BioWare").await;

    let resp = auth_get(&app, &token, &format!("/api/v1/games/{}", id)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Baldur's Gate II");
    assert_eq!(body["year_released"], 2000);
    assert_eq!(body["genre"], "RPG");
    assert_eq!(body["studio"], "BioWare");
}

#[actix_rt::test]
async fn test_get_unknown_game_is_404() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    let resp = auth_get(&app, &token, "/api/v1/games/123").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(
        body["message"].as_str().unwrap().contains("123"),
        "unexpected body: {}",
        body
    );
}

#[actix_rt::test]
async fn test_create_game_missing_field_is_400() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/games")
        .insert_header(("Authorization", format!("Token {}", token)))
        .set_json(serde_json::json!({
            "name": "Gothic",
            "year_released": 2001,
            "studio": "Piranha Bytes",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("missing value for genre"),
        "unexpected body: {}",
        body
    );
}

#[actix_rt::test]
async fn test_filter_by_genre_and_year() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    create_game(&app, &token, "Baldur's Gate II", 2000, "RPG", "BioWare").await;
    create_game(&app, &token, "Gothic", 2001, "RPG", "Piranha Bytes").await;
    create_game(&app, &token, "Super Mario Bros", 1985, "platformer", "Nintendo").await;

    // genre only
    let resp = auth_get(&app, &token, "/api/v1/games?genre=RPG").await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 2);

    // genre + year
    let resp = auth_get(&app, &token, "/api/v1/games?genre=RPG&year_released=2001").await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "Gothic");

    // year only, no match
    let resp = auth_get(&app, &token, "/api/v1/games?year_released=1999").await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 0);
}

#[actix_rt::test]
async fn test_pagination_walks_pages() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    for i in 0..15 {
        create_game(&app, &token, &format!("Game {}", i), 2000 + i, "RPG", "Studio").await;
    }

    // Default page size is 10
    let resp = auth_get(&app, &token, "/api/v1/games").await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 15);
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
    assert!(body["next"].as_str().unwrap().contains("page=2"));
    assert!(body["previous"].is_null());

    let resp = auth_get(&app, &token, "/api/v1/games?page=2").await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
    assert!(body["next"].is_null());
    assert!(body["previous"].as_str().unwrap().contains("page=1"));

    // Past the end
    let resp = auth_get(&app, &token, "/api/v1/games?page=3").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_page_size_respected_and_filters_preserved_in_links() {
    let app = init_app().await;
    let token = signup(&app, "player1").await;

    for i in 0..7 {
        create_game(&app, &token, &format!("RPG {}", i), 2000, "RPG", "Studio").await;
    }
    create_game(&app, &token, "Mario", 1985, "platformer", "Nintendo").await;

    let resp = auth_get(&app, &token, "/api/v1/games?genre=RPG&page_size=5").await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 7);
    assert_eq!(body["results"].as_array().unwrap().len(), 5);

    let next = body["next"].as_str().unwrap();
    assert!(next.contains("page=2"), "next link: {}", next);
    assert!(next.contains("genre=RPG"), "next link: {}", next);
    assert!(next.contains("page_size=5"), "next link: {}", next);
}
