use crate::{
    model::tournament::TournamentDto,
    server::{
        data::{event::EventRepository, upstream::UpstreamClient},
        error::AppError,
        middleware::auth::BearerToken,
    },
};

pub struct TournamentService<'a> {
    upstream: &'a UpstreamClient,
}

impl<'a> TournamentService<'a> {
    pub fn new(upstream: &'a UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Lists the tournaments the token's owner takes part in.
    ///
    /// # Returns
    /// - `Ok(Vec<TournamentDto>)` - Tournaments in upstream order
    /// - `Err(AppError::UpstreamErr)` - The upstream call failed
    pub async fn list(&self, token: &BearerToken) -> Result<Vec<TournamentDto>, AppError> {
        let events = EventRepository::new(self.upstream)
            .get_player_events(token)
            .await?;

        Ok(events.into_iter().map(|event| event.into_dto()).collect())
    }
}
