use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, post},
};

use crate::{
    dto::favorites::{AddFavoriteRequest, FavoriteList},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::Favorite,
    response::ApiResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_favorite))
        .route("/{id}", delete(remove_favorite))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = ApiResponse<Favorite>),
        (status = 400, description = "Missing user or no target given"),
        (status = 404, description = "User or target not found")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let resp = favorite_service::add_favorite(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Favorite not found")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = favorite_service::remove_favorite(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = ApiResponse<FavoriteList>),
        (status = 404, description = "User not found")
    ),
    tag = "Favorites"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<FavoriteList>>> {
    let resp = favorite_service::list_user_favorites(&state, id).await?;
    Ok(Json(resp))
}
