use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Planet;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PlanetList {
    #[schema(value_type = Vec<Planet>)]
    pub items: Vec<Planet>,
}
