use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    InvalidProposer = 1,
    InvalidTitle = 2,
    InvalidDescription = 3,
    InvalidGoal = 4,
    NotFound = 5,
    Unauthorized = 6,
    CampaignEnded = 7,
    GoalReached = 8,
    InvalidAmount = 9,
}

impl CrowdfundError {
    /// Human-readable description, for clients that surface the error code.
    pub fn message(&self) -> &'static str {
        match self {
            CrowdfundError::InvalidProposer => "Invalid proposer",
            CrowdfundError::InvalidTitle => "Invalid title",
            CrowdfundError::InvalidDescription => "Invalid description",
            CrowdfundError::InvalidGoal => "Invalid goal",
            CrowdfundError::NotFound => "Campaign not found",
            CrowdfundError::Unauthorized => "Caller is not the campaign proposer",
            CrowdfundError::CampaignEnded => "This campaign has ended",
            CrowdfundError::GoalReached => "The campaign has already reached its goal",
            CrowdfundError::InvalidAmount => "Donation amount must be positive",
        }
    }
}
