use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::characters::{CharacterList, CreateCharacterRequest, UpdateCharacterRequest},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::Character,
    response::ApiResponse,
    services::character_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_characters).post(create_character))
        .route("/{id}", get(get_character).put(update_character))
}

#[utoipa::path(
    get,
    path = "/characters",
    responses(
        (status = 200, description = "List characters", body = ApiResponse<CharacterList>),
        (status = 404, description = "No characters")
    ),
    tag = "Characters"
)]
pub async fn list_characters(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CharacterList>>> {
    let resp = character_service::list_characters(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = ApiResponse<Character>),
        (status = 404, description = "Character not found")
    ),
    tag = "Characters"
)]
pub async fn get_character(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Character>>> {
    let resp = character_service::get_character(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/characters",
    request_body = CreateCharacterRequest,
    responses(
        (status = 201, description = "Character created", body = ApiResponse<Character>),
        (status = 400, description = "Missing field"),
        (status = 409, description = "Name already taken")
    ),
    tag = "Characters"
)]
pub async fn create_character(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCharacterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Character>>)> {
    let resp = character_service::create_character(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/characters/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = UpdateCharacterRequest,
    responses(
        (status = 200, description = "Character updated", body = ApiResponse<Character>),
        (status = 400, description = "Empty or invalid body"),
        (status = 404, description = "Character not found"),
        (status = 409, description = "Name already taken")
    ),
    tag = "Characters"
)]
pub async fn update_character(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<serde_json::Value>,
) -> AppResult<Json<ApiResponse<Character>>> {
    let payload = UpdateCharacterRequest::from_body(body)?;
    let resp = character_service::update_character(&state, id, payload).await?;
    Ok(Json(resp))
}
