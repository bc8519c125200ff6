mod common;

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tokio::sync::Semaphore;
use tower::ServiceExt;

use starwars_api::routes::{App, create_app, create_app_with_limit};

use common::{insert_character, insert_film, insert_planet, setup_state};

async fn send(app: &App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_user(app: &App, email: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "email": email, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("user id")
}

#[tokio::test]
async fn user_creation_and_lookup() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "luke@rebellion.org", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["email"], "luke@rebellion.org");
    assert_eq!(body["data"]["is_active"], true);
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "luke@rebellion.org");

    let (status, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["meta"]["total"], 1);

    let (status, body) = send(&app, Method::GET, "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
    Ok(())
}

#[tokio::test]
async fn duplicate_email_returns_conflict() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);
    create_user(&app, "vader@empire.gov").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "vader@empire.gov", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User already exists");
    Ok(())
}

#[tokio::test]
async fn user_creation_requires_email_and_password() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "nopass@rebellion.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");
    assert_eq!(body["data"]["error"], "Email and password are required");
    Ok(())
}

#[tokio::test]
async fn empty_collections_return_not_found() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    for uri in ["/users", "/characters", "/planets", "/films"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["message"], "not found", "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn planets_and_films_are_readable() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let planet = insert_planet(&state, "Tatooine").await?;
    let film = insert_film(&state, "A New Hope").await?;
    let app = create_app(state);

    let (status, body) = send(&app, Method::GET, "/planets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Tatooine");
    assert_eq!(body["data"][0]["population"], "200000");

    let (status, body) = send(&app, Method::GET, &format!("/planets/{}", planet.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["climate"], "arid");

    let (status, body) = send(&app, Method::GET, &format!("/films/{}", film.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["director"], "George Lucas");

    let (status, body) = send(&app, Method::GET, "/films/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Film not found");

    let (status, _) = send(&app, Method::GET, "/planets/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn character_update_only_touches_given_fields() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(
        &app,
        Method::POST,
        "/characters",
        Some(json!({ "name": "Leia Organa", "eye_color": "brown", "hair_color": "brown" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Character created successfully");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/characters/{id}"),
        Some(json!({ "eye_color": "hazel", "id": 999, "species": "human" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Character updated successfully");
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Leia Organa");
    assert_eq!(body["data"]["eye_color"], "hazel");
    assert_eq!(body["data"]["hair_color"], "brown");

    let (status, body) = send(&app, Method::GET, &format!("/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["eye_color"], "hazel");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/characters/4242",
        Some(json!({ "name": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Character with id 4242 not found");

    let (status, _) = send(&app, Method::PUT, &format!("/characters/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn character_creation_validates_body() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(
        &app,
        Method::POST,
        "/characters",
        Some(json!({ "name": "R2-D2", "eye_color": "red" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing field: hair_color");

    let (status, body) = send(&app, Method::POST, "/characters", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No input data provided");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/characters")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn favorites_lifecycle() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let planet = insert_planet(&state, "Hoth").await?;
    let film = insert_film(&state, "The Empire Strikes Back").await?;
    let app = create_app(state);
    let user_id = create_user(&app, "han@falcon.net").await;

    let (status, body) = send(&app, Method::GET, &format!("/users/{user_id}/favorites"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({ "user_id": user_id, "planets_id": planet.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["id"], user_id);
    assert_eq!(body["data"]["planet"]["name"], "Hoth");
    assert!(body["data"]["character"].is_null());
    assert!(body["data"]["film"].is_null());
    let planet_fav = body["data"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({ "user_id": user_id, "films_id": film.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, &format!("/users/{user_id}/favorites"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

    let (status, body) = send(&app, Method::DELETE, &format!("/favorites/{planet_fav}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite deleted");

    let (status, body) = send(&app, Method::GET, &format!("/users/{user_id}/favorites"), None).await;
    assert_eq!(status, StatusCode::OK);
    let remaining = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["film"]["name"], "The Empire Strikes Back");

    let (status, _) = send(&app, Method::GET, "/users/9000/favorites", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn favorite_without_target_is_bad_request() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);
    let user_id = create_user(&app, "leia@rebellion.org").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({
            "user_id": user_id,
            "character_id": null,
            "planets_id": null,
            "films_id": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Must provide at least one type of favorite");
    Ok(())
}

#[tokio::test]
async fn deleting_missing_favorite_is_not_found() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(&app, Method::DELETE, "/favorites/31337", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite not found");
    Ok(())
}

#[tokio::test]
async fn malformed_path_and_unknown_route() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(&app, Method::GET, "/characters/luke", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().starts_with("Invalid path parameter"));

    let (status, body) = send(&app, Method::GET, "/starships", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/starships");
    Ok(())
}

#[tokio::test]
async fn sitemap_lists_documented_endpoints() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let endpoints: Vec<&str> = body["data"]["endpoints"]
        .as_array()
        .expect("endpoints")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    for expected in ["/users", "/users/{id}/favorites", "/characters/{id}", "/favorites/{id}"] {
        assert!(endpoints.contains(&expected), "missing {expected}");
    }
    Ok(())
}

#[tokio::test]
async fn responses_carry_request_id() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "order-66")
        .body(Body::empty())?;
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("order-66")
    );

    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = app.oneshot(request).await?;
    assert!(response.headers().contains_key("x-request-id"));
    Ok(())
}

#[tokio::test]
async fn character_update_with_only_unknown_keys_is_a_no_op() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let yoda = insert_character(&state, "Yoda").await?;
    let app = create_app(state);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/characters/{}", yoda.id),
        Some(json!({ "species": "muppet" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Yoda");
    assert_eq!(body["data"]["eye_color"], "blue");
    assert_eq!(body["data"]["hair_color"], "blond");
    assert!(body["data"].get("species").is_none());
    Ok(())
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_route() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let planet = insert_planet(&state, "Bespin").await?;
    let app = create_app(state);

    let (status, body) = send(&app, Method::GET, "/planets/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Bespin");

    let (status, body) = send(&app, Method::GET, &format!("/planets/{}/", planet.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Bespin");

    // Empty table: the handler's 404, not the fallback's.
    let (status, body) = send(&app, Method::GET, "/characters/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "not found");
    Ok(())
}

#[tokio::test]
async fn in_flight_limit_is_shared_across_routes() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_planet(&state, "Endor").await?;
    insert_film(&state, "Return of the Jedi").await?;

    let permits = Arc::new(Semaphore::new(1));
    let app = create_app_with_limit(state, permits.clone());

    // With the single permit taken, no route may start.
    let held = permits.clone().acquire_owned().await?;
    for uri in ["/planets", "/films"] {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let pending = tokio::time::timeout(
            Duration::from_millis(100),
            app.clone().oneshot(request),
        )
        .await;
        assert!(pending.is_err(), "{uri} ran while the limit was held");
    }

    drop(held);
    for uri in ["/planets", "/films"] {
        let (status, _) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
    assert_eq!(permits.available_permits(), 1);
    Ok(())
}
