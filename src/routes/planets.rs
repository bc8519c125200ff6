use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::planets::PlanetList,
    error::AppResult,
    extract::ApiPath,
    models::Planet,
    response::ApiResponse,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets))
        .route("/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "List planets", body = ApiResponse<PlanetList>),
        (status = 404, description = "No planets")
    ),
    tag = "Planets"
)]
pub async fn list_planets(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PlanetList>>> {
    let resp = planet_service::list_planets(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = ApiResponse<Planet>),
        (status = 404, description = "Planet not found")
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let resp = planet_service::get_planet(&state, id).await?;
    Ok(Json(resp))
}
