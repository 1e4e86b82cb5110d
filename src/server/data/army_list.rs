use crate::server::{
    data::upstream::UpstreamClient, error::upstream::UpstreamError,
    middleware::auth::BearerToken, model::army_list::ArmyList,
};

pub struct ArmyListRepository<'a> {
    client: &'a UpstreamClient,
}

impl<'a> ArmyListRepository<'a> {
    pub fn new(client: &'a UpstreamClient) -> Self {
        Self { client }
    }

    /// Gets a single army list by id
    pub async fn get_by_id(
        &self,
        list_id: &str,
        token: &BearerToken,
    ) -> Result<ArmyList, UpstreamError> {
        self.client.fetch(&["armylists", list_id], &[], token).await
    }
}
