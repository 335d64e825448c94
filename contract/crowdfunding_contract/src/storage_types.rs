use soroban_sdk::{contracttype, Address, String, Vec};

pub type CampaignId = u64;

// Storage keys. `NextCampaignId` lives in instance storage, campaigns in persistent storage.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    NextCampaignId,
    Campaign(CampaignId),
}

/// A single accepted contribution. Recorded per call, never merged per donor.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donor {
    pub donor: Address,
    pub amount: i128, // Amount credited toward the goal
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub proposer: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub total_donations: i128,
    pub created_at: u64,
    pub deadline: u64, // Ledger timestamp, seconds
    pub donors: Vec<Donor>,
}

impl Campaign {
    pub fn is_funded(&self) -> bool {
        self.total_donations >= self.goal
    }

    pub fn remaining(&self) -> i128 {
        self.goal - self.total_donations
    }
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86400;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
