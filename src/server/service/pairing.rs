use crate::{
    model::pairing::PairingDto,
    server::{
        data::{pairing::PairingRepository, upstream::UpstreamClient},
        error::AppError,
        middleware::auth::BearerToken,
    },
};

pub struct PairingService<'a> {
    upstream: &'a UpstreamClient,
}

impl<'a> PairingService<'a> {
    pub fn new(upstream: &'a UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Lists the pairings of one tournament round.
    ///
    /// # Arguments
    /// - `tournament_id` - Upstream event id
    /// - `round` - Round number
    /// - `token` - Caller's bearer token
    ///
    /// # Returns
    /// - `Ok(Vec<PairingDto>)` - Pairings in upstream order, points defaulted to 0
    /// - `Err(AppError::UpstreamErr)` - The upstream call failed
    pub async fn list_round(
        &self,
        tournament_id: &str,
        round: u32,
        token: &BearerToken,
    ) -> Result<Vec<PairingDto>, AppError> {
        let pairings = PairingRepository::new(self.upstream)
            .get_by_round(tournament_id, round, token)
            .await?;

        Ok(pairings.into_iter().map(|pairing| pairing.into_dto()).collect())
    }
}
