use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Character,
};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

/// Partial update. Absent fields keep their stored value; unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

impl UpdateCharacterRequest {
    /// Reads an update from a raw JSON body. Only an empty body (`{}` or `null`) is
    /// rejected; a body with nothing but unknown keys yields an update that changes nothing.
    pub fn from_body(body: Value) -> AppResult<Self> {
        let no_input = match &body {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if no_input {
            return Err(AppError::BadRequest("No input data provided".into()));
        }
        serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.eye_color.is_none() && self.hair_color.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CharacterList {
    #[schema(value_type = Vec<Character>)]
    pub items: Vec<Character>,
}
