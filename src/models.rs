use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::{characters, films, planets, users};

/// Public view of a user. The password hash never leaves the database layer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub gravity: String,
    pub climate: String,
    pub population: String,
    pub rotation_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Film {
    pub id: i32,
    pub name: String,
    pub created: String,
    pub edited: String,
    pub producer: String,
    pub title: String,
    pub director: String,
}

/// A favorite with its owner and targets inlined. Targets that are not set are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user: User,
    pub character: Option<Character>,
    pub planet: Option<Planet>,
    pub film: Option<Film>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            eye_color: model.eye_color,
            hair_color: model.hair_color,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gravity: model.gravity,
            climate: model.climate,
            population: model.population,
            rotation_period: model.rotation_period,
        }
    }
}

impl From<films::Model> for Film {
    fn from(model: films::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created: model.created,
            edited: model.edited,
            producer: model.producer,
            title: model.title,
            director: model.director,
        }
    }
}
