use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, roster::RosterDto},
    server::{
        error::AppError, middleware::auth::BearerToken, service::roster::RosterService,
        state::AppState, util::parse::require_param,
    },
};

/// Tag for grouping roster endpoints in OpenAPI documentation
pub static ROSTER_TAG: &str = "roster";

#[derive(Deserialize)]
pub struct RosterParams {
    pub id: Option<String>,
}

/// List the submitted army lists of a tournament.
///
/// Runs the throttled roster pipeline: the response takes at least
/// `(1 + submitted lists) * throttle interval`. Lists that fail to load are skipped.
///
/// # Arguments
/// - `state` - Application state containing the upstream client and throttle
/// - `token` - Caller's bearer token from the `token` query parameter
/// - `params` - Query parameters carrying the tournament `id`
///
/// # Returns
/// - `200 OK` - Rosters that could be fetched, possibly empty
/// - `400 Bad Request` - Missing token or tournament id
/// - Upstream status - Player list request rejected, body forwarded as `details`
/// - `500 Internal Server Error` - Upstream API unreachable
#[utoipa::path(
    get,
    path = "/api/lists",
    tag = ROSTER_TAG,
    params(
        ("token" = String, Query, description = "Upstream bearer token"),
        ("id" = String, Query, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved rosters", body = Vec<RosterDto>),
        (status = 400, description = "Token or tournament id not provided", body = ErrorDto),
        (status = 500, description = "Upstream API unreachable", body = ErrorDto)
    ),
)]
pub async fn get_lists(
    State(state): State<AppState>,
    token: BearerToken,
    params: Result<Query<RosterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let tournament_id = require_param(params.id, "Tournament id not provided")?;

    let service = RosterService::new(&state.upstream, state.throttle);

    let rosters = service.list_for_tournament(&tournament_id, &token).await?;

    Ok((StatusCode::OK, Json(rosters)))
}
