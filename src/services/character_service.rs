use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::{
        characters::{CharacterList, CreateCharacterRequest, UpdateCharacterRequest},
        required,
    },
    entity::characters::{ActiveModel, Column, Entity as Characters},
    error::{AppError, AppResult},
    models::Character,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_characters(state: &AppState) -> AppResult<ApiResponse<CharacterList>> {
    let items: Vec<Character> = Characters::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();

    if items.is_empty() {
        return Err(AppError::NotFound("not found".into()));
    }

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Characters",
        CharacterList { items },
        Some(meta),
    ))
}

pub async fn get_character(state: &AppState, id: i32) -> AppResult<ApiResponse<Character>> {
    let character = Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".into()))?;
    Ok(ApiResponse::success(
        "Character",
        Character::from(character),
        None,
    ))
}

pub async fn create_character(
    state: &AppState,
    payload: CreateCharacterRequest,
) -> AppResult<ApiResponse<Character>> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(required(payload.name, "name")?),
        eye_color: Set(required(payload.eye_color, "eye_color")?),
        hair_color: Set(required(payload.hair_color, "hair_color")?),
    };
    let character = active.insert(&state.orm).await?;
    tracing::info!(character_id = character.id, name = %character.name, "character created");

    Ok(ApiResponse::success(
        "Character created successfully",
        Character::from(character),
        Some(Meta::empty()),
    ))
}

pub async fn update_character(
    state: &AppState,
    id: i32,
    payload: UpdateCharacterRequest,
) -> AppResult<ApiResponse<Character>> {
    let existing = Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Character with id {id} not found")))?;

    // Unknown attributes are ignored, so such a body leaves the record as stored.
    if payload.is_empty() {
        return Ok(ApiResponse::success(
            "Character updated successfully",
            Character::from(existing),
            Some(Meta::empty()),
        ));
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(eye_color) = payload.eye_color {
        active.eye_color = Set(eye_color);
    }
    if let Some(hair_color) = payload.hair_color {
        active.hair_color = Set(hair_color);
    }

    let character = active.update(&state.orm).await?;
    tracing::info!(character_id = character.id, "character updated");

    Ok(ApiResponse::success(
        "Character updated successfully",
        Character::from(character),
        Some(Meta::empty()),
    ))
}
