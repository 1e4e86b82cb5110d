use crate::server::{
    data::{upstream::UpstreamClient, PAGE_LIMIT},
    error::upstream::UpstreamError,
    middleware::auth::BearerToken,
    model::{event::Event, ListEnvelope},
};

pub struct EventRepository<'a> {
    client: &'a UpstreamClient,
}

impl<'a> EventRepository<'a> {
    pub fn new(client: &'a UpstreamClient) -> Self {
        Self { client }
    }

    /// Gets the events the token's owner takes part in (first page only)
    pub async fn get_player_events(&self, token: &BearerToken) -> Result<Vec<Event>, UpstreamError> {
        let envelope: ListEnvelope<Event> = self
            .client
            .fetch(
                &["events"],
                &[("limit", PAGE_LIMIT), ("playerEvents", "true")],
                token,
            )
            .await?;

        Ok(envelope.into_records())
    }
}
