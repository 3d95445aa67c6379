use axum::{
    routing::{get, patch},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod activities;
pub mod campers;
pub mod signups;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. Note the asymmetric surface carried
/// over from the product: no single-activity GET, no signup PATCH.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let api = Router::new()
        .route("/campers", get(campers::list_campers).post(campers::create_camper))
        .route(
            "/campers/:id",
            get(campers::get_camper)
                .patch(campers::update_camper)
                .delete(campers::delete_camper),
        )
        .route(
            "/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route(
            "/activities/:id",
            patch(activities::update_activity).delete(activities::delete_activity),
        )
        .route("/signups", get(signups::list_signups).post(signups::create_signup))
        .route(
            "/signups/:id",
            get(signups::get_signup).delete(signups::delete_signup),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
