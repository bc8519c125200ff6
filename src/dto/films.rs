use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Film;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FilmList {
    #[schema(value_type = Vec<Film>)]
    pub items: Vec<Film>,
}
