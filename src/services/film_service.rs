use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::films::FilmList,
    entity::films::{Column, Entity as Films},
    error::{AppError, AppResult},
    models::Film,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_films(state: &AppState) -> AppResult<ApiResponse<FilmList>> {
    let items: Vec<Film> = Films::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Film::from)
        .collect();

    if items.is_empty() {
        return Err(AppError::NotFound("not found".into()));
    }

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Films", FilmList { items }, Some(meta)))
}

pub async fn get_film(state: &AppState, id: i32) -> AppResult<ApiResponse<Film>> {
    let film = Films::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Film not found".into()))?;
    Ok(ApiResponse::success("Film", Film::from(film), None))
}
