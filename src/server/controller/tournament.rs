use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, tournament::TournamentDto},
    server::{
        error::AppError, middleware::auth::BearerToken, service::tournament::TournamentService,
        state::AppState,
    },
};

/// Tag for grouping tournament endpoints in OpenAPI documentation
pub static TOURNAMENT_TAG: &str = "tournament";

/// List the caller's tournaments.
///
/// Fetches the first page of events the token's owner takes part in and reshapes them
/// into tournaments.
///
/// # Arguments
/// - `state` - Application state containing the upstream client
/// - `token` - Caller's bearer token from the `token` query parameter
///
/// # Returns
/// - `200 OK` - Tournaments
/// - `400 Bad Request` - Missing token
/// - Upstream status - Upstream API rejected the call, body forwarded as `details`
/// - `500 Internal Server Error` - Upstream API unreachable
#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    params(
        ("token" = String, Query, description = "Upstream bearer token")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tournaments", body = Vec<TournamentDto>),
        (status = 400, description = "Token not provided", body = ErrorDto),
        (status = 500, description = "Upstream API unreachable", body = ErrorDto)
    ),
)]
pub async fn get_tournaments(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let service = TournamentService::new(&state.upstream);

    let tournaments = service.list(&token).await?;

    Ok((StatusCode::OK, Json(tournaments)))
}
