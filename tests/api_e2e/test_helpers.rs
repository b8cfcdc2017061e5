//! Shared helpers for the end-to-end API tests.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use sea_orm::{ConnectOptions, Database};

use gameshelf_lib::api;
use gameshelf_lib::db::DbPool;
use gameshelf_lib::migration::{Migrator, MigratorTrait};

/// Spin up the full route tree against a fresh in-memory SQLite database.
pub async fn init_app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    // One connection keeps every query on the same in-memory database
    opts.max_connections(1);

    let conn = Database::connect(opts)
        .await
        .expect("Failed to open in-memory SQLite");
    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    let pool = DbPool::from_connection(conn);

    test::init_service(
        App::new().app_data(web::Data::new(pool)).service(
            web::scope("/api/v1")
                .configure(api::configure_health_routes)
                .configure(api::configure_game_routes)
                .configure(api::configure_auth_routes)
                .configure(api::configure_favorite_routes),
        ),
    )
    .await
}

/// Register a user and assert success.
pub async fn register_user<S, B>(app: &S, username: &str, email: &str, password: &str)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth/register")
        .set_json(serde_json::json!({
            "username": username,
            "password": password,
            "email": email,
            "first_name": "Test",
            "last_name": "User",
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

/// Log in and return the raw bearer token.
pub async fn login_user<S, B>(app: &S, username: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/users/auth")
        .set_json(serde_json::json!({
            "username": username,
            "password": password,
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().expect("message field");
    message
        .strip_prefix("Token ")
        .expect("login message carries the token scheme")
        .to_string()
}

/// Register + login in one step, returning the token.
pub async fn signup<S, B>(app: &S, username: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let email = format!("{}@example.com", username);
    register_user(app, username, &email, "sekret-password").await;
    login_user(app, username, "sekret-password").await
}

/// Create a game through the API, returning its id.
pub async fn create_game<S, B>(
    app: &S,
    token: &str,
    name: &str,
    year_released: i32,
    genre: &str,
    studio: &str,
) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/games")
        .insert_header(("Authorization", format!("Token {}", token)))
        .set_json(serde_json::json!({
            "name": name,
            "year_released": year_released,
            "genre": genre,
            "studio": studio,
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["id"].as_i64().expect("created game has an id")
}

/// Authenticated GET returning the response.
pub async fn auth_get<S, B>(app: &S, token: &str, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", format!("Token {}", token)))
        .to_request();

    test::call_service(app, req).await
}

/// Authenticated POST with an empty body, returning the response.
pub async fn auth_post<S, B>(app: &S, token: &str, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header(("Authorization", format!("Token {}", token)))
        .to_request();

    test::call_service(app, req).await
}
