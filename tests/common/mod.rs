#![allow(dead_code)]

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use starwars_api::{
    db::{create_orm_conn, run_migrations},
    entity::{characters, films, planets},
    state::AppState,
};

/// Fresh in-memory database with the schema applied. Each call is isolated.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn insert_planet(state: &AppState, name: &str) -> anyhow::Result<planets::Model> {
    let planet = planets::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        gravity: Set("1 standard".into()),
        climate: Set("arid".into()),
        population: Set("200000".into()),
        rotation_period: Set("23".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet)
}

pub async fn insert_film(state: &AppState, name: &str) -> anyhow::Result<films::Model> {
    let film = films::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        created: Set("2014-12-10T14:23:31.880000Z".into()),
        edited: Set("2014-12-20T19:49:45.256000Z".into()),
        producer: Set("Gary Kurtz, Rick McCallum".into()),
        title: Set("Episode IV".into()),
        director: Set("George Lucas".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(film)
}

pub async fn insert_character(state: &AppState, name: &str) -> anyhow::Result<characters::Model> {
    let character = characters::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        eye_color: Set("blue".into()),
        hair_color: Set("blond".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(character)
}
