use soroban_sdk::Env;

use crate::storage_types::{Campaign, CampaignId, DataKey, TTL_INSTANCE, TTL_PERSISTENT};

/// Keyed campaign records over persistent contract storage.
///
/// Built once per invocation from the host `Env` and handed to the
/// operations by reference. Every write extends the entry TTL so records
/// outlive archival.
pub struct CampaignStore<'a> {
    env: &'a Env,
}

impl<'a> CampaignStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Upsert, overwriting any record already stored under the same id.
    pub fn insert(&self, campaign: &Campaign) {
        let key = DataKey::Campaign(campaign.id);
        self.env.storage().persistent().set(&key, campaign);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
    }

    pub fn get(&self, id: CampaignId) -> Option<Campaign> {
        self.env.storage().persistent().get(&DataKey::Campaign(id))
    }

    /// Removes the record and hands back its last state, if there was one.
    pub fn remove(&self, id: CampaignId) -> Option<Campaign> {
        let campaign = self.get(id)?;
        self.env.storage().persistent().remove(&DataKey::Campaign(id));
        Some(campaign)
    }

    /// Allocate a fresh id. Ids are never handed out twice, deletions included.
    pub fn next_id(&self) -> CampaignId {
        let id: CampaignId = self
            .env
            .storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .unwrap_or(1);
        self.env
            .storage()
            .instance()
            .set(&DataKey::NextCampaignId, &(id + 1));
        self.env
            .storage()
            .instance()
            .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
        id
    }
}
