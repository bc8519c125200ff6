use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::{
    response::{ApiResponse, Meta},
    routes::doc::ApiDoc,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct Sitemap {
    pub endpoints: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every documented endpoint", body = ApiResponse<Sitemap>),
    ),
    tag = "Health"
)]
pub async fn sitemap() -> Json<ApiResponse<Sitemap>> {
    let endpoints: Vec<String> = ApiDoc::openapi().paths.paths.into_keys().collect();
    let meta = Meta::total(endpoints.len());
    Json(ApiResponse::success("Sitemap", Sitemap { endpoints }, Some(meta)))
}
