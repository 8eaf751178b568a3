pub mod auth;
pub mod rest;

use std::sync::Arc;

use axum::{routing::get, Router};

use playshelf_store::ActivityStore;

pub struct AppState {
    pub store: ActivityStore,
    pub admin_password: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Collection: public list, admin-gated create
        .route(
            "/api/activities",
            get(rest::api_list_activities).post(rest::api_create_activity),
        )
        .route(
            "/api/activities/{id}",
            get(rest::api_get_activity)
                .put(rest::api_update_activity)
                .delete(rest::api_delete_activity),
        )
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
