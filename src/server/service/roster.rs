//! Roster aggregation pipeline.
//!
//! Assembling a tournament's army lists takes one upstream call for the player list and one
//! call per submitted list. The army-list endpoint rejects bursts, so the job runs in four
//! phases:
//!
//! 1. **Fetching players** - one call for the first page of players. Failure is fatal and
//!    propagated to the caller; no partial result is produced.
//! 2. **Extracting ids** - players without a `listId` are dropped. An empty set is not an error.
//! 3. **Fetching rosters sequentially** - after one throttle delay, each list is fetched in
//!    player order, one request in flight at a time, with a throttle delay after every fetch
//!    whether it succeeded or not. A failed fetch is logged and skipped.
//! 4. **Done** - the rosters collected so far are returned.
//!
//! The response cannot distinguish "nobody submitted a list" from "every fetch failed"; both
//! produce an empty list.
//!
//! The pipeline is a plain future owned by the request handler. If the client disconnects the
//! server drops that future, which stops the loop at its next throttle delay or upstream call.

use crate::{
    model::roster::RosterDto,
    server::{
        data::{army_list::ArmyListRepository, player::PlayerRepository, upstream::UpstreamClient},
        error::AppError,
        middleware::auth::BearerToken,
        model::player::extract_list_ids,
        util::throttle::Throttle,
    },
};

/// Outcome of the sequential roster fetch phase.
#[derive(Debug, Default)]
pub struct RosterBatch {
    /// Rosters fetched successfully, in player order.
    pub rosters: Vec<RosterDto>,
    /// Army-list ids whose fetch failed.
    pub failed: Vec<String>,
}

impl RosterBatch {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            rosters: Vec::with_capacity(capacity),
            failed: Vec::new(),
        }
    }

    pub fn requested(&self) -> usize {
        self.rosters.len() + self.failed.len()
    }
}

pub struct RosterService<'a> {
    upstream: &'a UpstreamClient,
    throttle: Throttle,
}

impl<'a> RosterService<'a> {
    pub fn new(upstream: &'a UpstreamClient, throttle: Throttle) -> Self {
        Self { upstream, throttle }
    }

    /// Collects the submitted army lists of a tournament.
    ///
    /// Takes at least `(1 + lists) * interval` because of the throttle.
    ///
    /// # Arguments
    /// - `tournament_id` - Upstream event id
    /// - `token` - Caller's bearer token
    ///
    /// # Returns
    /// - `Ok(Vec<RosterDto>)` - Rosters that could be fetched, in player order (possibly empty)
    /// - `Err(AppError::UpstreamErr)` - The player list could not be fetched
    pub async fn list_for_tournament(
        &self,
        tournament_id: &str,
        token: &BearerToken,
    ) -> Result<Vec<RosterDto>, AppError> {
        let players = PlayerRepository::new(self.upstream)
            .get_by_event_id(tournament_id, token)
            .await?;

        let player_count = players.len();
        let list_ids = extract_list_ids(players);
        tracing::debug!(
            "Tournament {}: {} of {} players submitted a list",
            tournament_id,
            list_ids.len(),
            player_count
        );

        self.throttle.wait().await;

        let batch = self.fetch_sequentially(list_ids, token).await;

        tracing::info!(
            "Tournament {}: fetched {} of {} rosters ({} failed)",
            tournament_id,
            batch.rosters.len(),
            batch.requested(),
            batch.failed.len()
        );

        Ok(batch.rosters)
    }

    /// Fetches each army list in order, pausing after every attempt.
    ///
    /// Never fails: an individual fetch error only excludes that list from the batch.
    pub async fn fetch_sequentially(&self, list_ids: Vec<String>, token: &BearerToken) -> RosterBatch {
        let repo = ArmyListRepository::new(self.upstream);
        let mut batch = RosterBatch::with_capacity(list_ids.len());

        for list_id in list_ids {
            match repo.get_by_id(&list_id, token).await {
                Ok(army_list) => batch.rosters.push(army_list.into_dto()),
                Err(e) => {
                    tracing::warn!("Failed to fetch army list {}: {}", list_id, e);
                    batch.failed.push(list_id);
                }
            }

            self.throttle.wait().await;
        }

        batch
    }
}
