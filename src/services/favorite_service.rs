use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, QueryOrder, Set,
};

use crate::{
    dto::favorites::{AddFavoriteRequest, FavoriteList},
    entity::{
        Characters, Films, Planets, Users, favorites,
        favorites::{ActiveModel, Entity as Favorites},
    },
    error::{AppError, AppResult},
    models::{Character, Favorite, Film, Planet, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_user_favorites(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<FavoriteList>> {
    let user = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let rows = user
        .find_related(Favorites)
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;

    let items = hydrate(&state.orm, rows).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("OK", FavoriteList { items }, Some(meta)))
}

pub async fn add_favorite(
    state: &AppState,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    let user_id = payload.validate()?;

    if Users::find_by_id(user_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }
    if let Some(id) = payload.character_id {
        if Characters::find_by_id(id).one(&state.orm).await?.is_none() {
            return Err(AppError::NotFound("Character not found".into()));
        }
    }
    if let Some(id) = payload.planets_id {
        if Planets::find_by_id(id).one(&state.orm).await?.is_none() {
            return Err(AppError::NotFound("Planet not found".into()));
        }
    }
    if let Some(id) = payload.films_id {
        if Films::find_by_id(id).one(&state.orm).await?.is_none() {
            return Err(AppError::NotFound("Film not found".into()));
        }
    }

    let active = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        character_id: Set(payload.character_id),
        planets_id: Set(payload.planets_id),
        films_id: Set(payload.films_id),
    };
    let row = active.insert(&state.orm).await?;
    tracing::info!(
        favorite_id = row.id,
        user_id = row.user_id,
        character_id = ?row.character_id,
        planets_id = ?row.planets_id,
        films_id = ?row.films_id,
        "favorite created"
    );

    let favorite = hydrate(&state.orm, vec![row])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("created favorite vanished")))?;

    Ok(ApiResponse::success(
        "Favorite created",
        favorite,
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Favorites::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Favorite not found".into()));
    }
    tracing::info!(favorite_id = id, "favorite deleted");

    Ok(ApiResponse::success(
        "Favorite deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}

/// Inlines the owner and targets of each favorite through the declared `belongs_to`
/// relations, one batched query per related table.
async fn hydrate(
    db: &DatabaseConnection,
    rows: Vec<favorites::Model>,
) -> AppResult<Vec<Favorite>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let users = rows.load_one(Users, db).await?;
    let characters = rows.load_one(Characters, db).await?;
    let planets = rows.load_one(Planets, db).await?;
    let films = rows.load_one(Films, db).await?;

    rows.into_iter()
        .zip(users)
        .zip(characters)
        .zip(planets)
        .zip(films)
        .map(|((((row, user), character), planet), film)| {
            let user = user.ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "favorite {} references missing user {}",
                    row.id,
                    row.user_id
                ))
            })?;
            Ok(Favorite {
                id: row.id,
                user: User::from(user),
                character: character.map(Character::from),
                planet: planet.map(Planet::from),
                film: film.map(Film::from),
            })
        })
        .collect()
}
