use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    http::{HeaderName, Request, Response, StatusCode, Uri},
    routing::get,
};
use tokio::sync::Semaphore;
use tower::{Layer, limit::GlobalConcurrencyLimitLayer};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod characters;
pub mod doc;
pub mod favorites;
pub mod films;
pub mod health;
pub mod planets;
pub mod sitemap;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";
pub const MAX_IN_FLIGHT: usize = 100;

/// The served application. Paths are normalized before routing, so `/films/` reaches `/films`.
pub type App = NormalizePath<Router>;

// Build the resource router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/characters", characters::router())
        .nest("/planets", planets::router())
        .nest("/films", films::router())
        .nest("/favorites", favorites::router())
}

/// The complete application: resource routes, sitemap, health, docs and the middleware stack.
pub fn create_app(state: AppState) -> App {
    create_app_with_limit(state, Arc::new(Semaphore::new(MAX_IN_FLIGHT)))
}

/// Like [`create_app`], with every route drawing its in-flight permit from `permits`.
pub fn create_app_with_limit(state: AppState, permits: Arc<Semaphore>) -> App {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    let router = Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(GlobalConcurrencyLimitLayer::with_semaphore(permits))
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
