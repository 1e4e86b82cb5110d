use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        pairing::PairingDto,
        roster::RosterDto,
        tournament::TournamentDto,
    },
    server::{
        controller::{
            health::{self, get_health},
            pairing::{self, get_round},
            roster::{self, get_lists},
            tournament::{self, get_tournaments},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        tournament::get_tournaments,
        roster::get_lists,
        pairing::get_round,
        health::get_health
    ),
    components(schemas(TournamentDto, RosterDto, PairingDto, ErrorDto, HealthDto))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/lists", get(get_lists))
        .route("/api/round", get(get_round))
        .route("/api/health", get(get_health))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

/// Builds the complete application: routes, shared state, request tracing and CORS.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
