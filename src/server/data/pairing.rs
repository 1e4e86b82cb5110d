use crate::server::{
    data::upstream::UpstreamClient,
    error::upstream::UpstreamError,
    middleware::auth::BearerToken,
    model::{pairing::Pairing, ListEnvelope},
};

pub struct PairingRepository<'a> {
    client: &'a UpstreamClient,
}

impl<'a> PairingRepository<'a> {
    pub fn new(client: &'a UpstreamClient) -> Self {
        Self { client }
    }

    /// Gets the pairings of one round of an event
    pub async fn get_by_round(
        &self,
        event_id: &str,
        round: u32,
        token: &BearerToken,
    ) -> Result<Vec<Pairing>, UpstreamError> {
        let round = round.to_string();
        let envelope: ListEnvelope<Pairing> = self
            .client
            .fetch(
                &["events", event_id, "pairings"],
                &[
                    ("eventId", event_id),
                    ("round", round.as_str()),
                    ("pairingType", "Pairing"),
                ],
                token,
            )
            .await?;

        Ok(envelope.into_records())
    }
}
