use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::planets::PlanetList,
    entity::planets::{Column, Entity as Planets},
    error::{AppError, AppResult},
    models::Planet,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<ApiResponse<PlanetList>> {
    let items: Vec<Planet> = Planets::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();

    if items.is_empty() {
        return Err(AppError::NotFound("not found".into()));
    }

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Planets", PlanetList { items }, Some(meta)))
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<ApiResponse<Planet>> {
    let planet = Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(ApiResponse::success("Planet", Planet::from(planet), None))
}
