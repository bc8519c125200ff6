use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::films::FilmList,
    error::AppResult,
    extract::ApiPath,
    models::Film,
    response::ApiResponse,
    services::film_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_films))
        .route("/{id}", get(get_film))
}

#[utoipa::path(
    get,
    path = "/films",
    responses(
        (status = 200, description = "List films", body = ApiResponse<FilmList>),
        (status = 404, description = "No films")
    ),
    tag = "Films"
)]
pub async fn list_films(State(state): State<AppState>) -> AppResult<Json<ApiResponse<FilmList>>> {
    let resp = film_service::list_films(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/films/{id}",
    params(
        ("id" = i32, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Get film", body = ApiResponse<Film>),
        (status = 404, description = "Film not found")
    ),
    tag = "Films"
)]
pub async fn get_film(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Film>>> {
    let resp = film_service::get_film(&state, id).await?;
    Ok(Json(resp))
}
