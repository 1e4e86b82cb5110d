use crate::server::{
    data::{upstream::UpstreamClient, PAGE_LIMIT},
    error::upstream::UpstreamError,
    middleware::auth::BearerToken,
    model::{player::Player, ListEnvelope},
};

pub struct PlayerRepository<'a> {
    client: &'a UpstreamClient,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(client: &'a UpstreamClient) -> Self {
        Self { client }
    }

    /// Gets the players registered for an event.
    ///
    /// Only the first page of 100 players is requested; later players are silently dropped.
    pub async fn get_by_event_id(
        &self,
        event_id: &str,
        token: &BearerToken,
    ) -> Result<Vec<Player>, UpstreamError> {
        let envelope: ListEnvelope<Player> = self
            .client
            .fetch(
                &["players"],
                &[("limit", PAGE_LIMIT), ("eventId", event_id)],
                token,
            )
            .await?;

        Ok(envelope.into_records())
    }
}
