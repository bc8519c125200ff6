use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Favorite,
};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub planets_id: Option<i32>,
    pub films_id: Option<i32>,
}

impl AddFavoriteRequest {
    /// Returns the owner id once the request names an owner and at least one target.
    /// More than one target on the same favorite is accepted.
    pub fn validate(&self) -> AppResult<i32> {
        let user_id = self
            .user_id
            .ok_or_else(|| AppError::BadRequest("Missing field: user_id".into()))?;
        if self.character_id.is_none() && self.planets_id.is_none() && self.films_id.is_none() {
            return Err(AppError::BadRequest(
                "Must provide at least one type of favorite".into(),
            ));
        }
        Ok(user_id)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteList {
    #[schema(value_type = Vec<Favorite>)]
    pub items: Vec<Favorite>,
}
