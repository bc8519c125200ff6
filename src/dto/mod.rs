pub mod characters;
pub mod favorites;
pub mod films;
pub mod planets;
pub mod users;

use crate::error::{AppError, AppResult};

/// Unwraps a required string field, treating an empty string the same as an absent one.
pub(crate) fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Missing field: {field}"))),
    }
}
