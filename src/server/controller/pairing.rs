use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, pairing::PairingDto},
    server::{
        error::AppError,
        middleware::auth::BearerToken,
        service::pairing::PairingService,
        state::AppState,
        util::parse::{parse_round, require_param},
    },
};

/// Tag for grouping pairing endpoints in OpenAPI documentation
pub static PAIRING_TAG: &str = "pairing";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundParams {
    pub tournament_id: Option<String>,
    pub round: Option<String>,
}

/// List the pairings of a tournament round.
///
/// # Arguments
/// - `state` - Application state containing the upstream client
/// - `token` - Caller's bearer token from the `token` query parameter
/// - `params` - Query parameters carrying `tournamentId` and `round`
///
/// # Returns
/// - `200 OK` - Pairings, with missing points reported as 0
/// - `400 Bad Request` - Missing token, tournament id or round, or a non-numeric round
/// - Upstream status - Upstream API rejected the call, body forwarded as `details`
/// - `500 Internal Server Error` - Upstream API unreachable
#[utoipa::path(
    get,
    path = "/api/round",
    tag = PAIRING_TAG,
    params(
        ("token" = String, Query, description = "Upstream bearer token"),
        ("tournamentId" = String, Query, description = "Tournament id"),
        ("round" = u32, Query, description = "Round number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pairings", body = Vec<PairingDto>),
        (status = 400, description = "Missing or invalid parameter", body = ErrorDto),
        (status = 500, description = "Upstream API unreachable", body = ErrorDto)
    ),
)]
pub async fn get_round(
    State(state): State<AppState>,
    token: BearerToken,
    params: Result<Query<RoundParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let tournament_id = require_param(params.tournament_id, "Tournament id not provided")?;
    let round = parse_round(&require_param(params.round, "Round not provided")?)?;

    let service = PairingService::new(&state.upstream);

    let pairings = service.list_round(&tournament_id, round, &token).await?;

    Ok((StatusCode::OK, Json(pairings)))
}
