#![no_std]

mod errors;
mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use errors::CrowdfundError;
pub use storage::CampaignStore;
pub use storage_types::*;
pub use utils::*;

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Create a new campaign owned by `proposer`, open for `deadline_days` days
    pub fn create_campaign(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        goal: i128,
        deadline_days: u32,
    ) -> Result<Campaign, CrowdfundError> {
        if proposer == env.current_contract_address() {
            return Err(CrowdfundError::InvalidProposer);
        }
        proposer.require_auth();

        validate_title(&title)?;
        validate_description(&description)?;
        validate_goal(goal)?;

        let store = CampaignStore::new(&env);
        let created_at = env.ledger().timestamp();
        let deadline = created_at.saturating_add(days_to_seconds(deadline_days));

        let campaign = Campaign {
            id: store.next_id(),
            proposer: proposer.clone(),
            title,
            description,
            goal,
            total_donations: 0,
            created_at,
            deadline,
            donors: Vec::new(&env),
        };
        store.insert(&campaign);

        log!(&env, "campaign created", campaign.id, goal);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: campaign.id,
                proposer,
                goal,
                deadline,
            },
        );

        Ok(campaign)
    }

    /// Replace title and description. Only the proposer may do this.
    pub fn update_campaign(
        env: Env,
        id: CampaignId,
        proposer: Address,
        title: String,
        description: String,
    ) -> Result<Campaign, CrowdfundError> {
        let store = CampaignStore::new(&env);
        let mut campaign = store.get(id).ok_or(CrowdfundError::NotFound)?;

        if campaign.proposer != proposer {
            return Err(CrowdfundError::Unauthorized);
        }
        proposer.require_auth();

        validate_title(&title)?;
        validate_description(&description)?;

        campaign.title = title;
        campaign.description = description;
        store.insert(&campaign);

        events::emit_campaign_updated(
            &env,
            events::CampaignUpdatedEvent {
                campaign_id: id,
                proposer,
            },
        );

        Ok(campaign)
    }

    /// Donate `amount` to a campaign.
    ///
    /// A donation that reaches or overshoots the goal is capped: only the
    /// amount still needed is credited and recorded in the donor history,
    /// and the surplus is published in a `donation_capped` event.
    pub fn donate_campaign(
        env: Env,
        id: CampaignId,
        donor: Address,
        amount: i128,
    ) -> Result<Campaign, CrowdfundError> {
        donor.require_auth();

        let store = CampaignStore::new(&env);
        let mut campaign = store.get(id).ok_or(CrowdfundError::NotFound)?;

        if is_past(&env, campaign.deadline) {
            return Err(CrowdfundError::CampaignEnded);
        }
        if campaign.is_funded() {
            return Err(CrowdfundError::GoalReached);
        }
        validate_amount(amount)?;

        let (credited, surplus) = split_donation(campaign.remaining(), amount);

        campaign.donors.push_back(Donor {
            donor: donor.clone(),
            amount: credited,
        });
        campaign.total_donations += credited;
        store.insert(&campaign);

        log!(&env, "donation credited", id, credited);
        events::emit_donation_received(
            &env,
            events::DonationReceivedEvent {
                campaign_id: id,
                donor: donor.clone(),
                amount: credited,
                total_donations: campaign.total_donations,
            },
        );
        if surplus > 0 {
            log!(&env, "goal reached, surplus not credited", id, surplus);
            events::emit_donation_capped(
                &env,
                events::DonationCappedEvent {
                    campaign_id: id,
                    donor,
                    offered: amount,
                    surplus,
                },
            );
        }

        Ok(campaign)
    }

    pub fn get_campaign(env: Env, id: CampaignId) -> Result<Campaign, CrowdfundError> {
        CampaignStore::new(&env)
            .get(id)
            .ok_or(CrowdfundError::NotFound)
    }

    /// Delete a campaign, returning its last known state. Only the proposer may do this.
    pub fn delete_campaign(
        env: Env,
        id: CampaignId,
        proposer: Address,
    ) -> Result<Campaign, CrowdfundError> {
        let store = CampaignStore::new(&env);
        let campaign = store.get(id).ok_or(CrowdfundError::NotFound)?;

        if campaign.proposer != proposer {
            return Err(CrowdfundError::Unauthorized);
        }
        proposer.require_auth();

        let campaign = store.remove(id).ok_or(CrowdfundError::NotFound)?;

        log!(&env, "campaign deleted", id);
        events::emit_campaign_deleted(
            &env,
            events::CampaignDeletedEvent {
                campaign_id: id,
                proposer,
                total_donations: campaign.total_donations,
            },
        );

        Ok(campaign)
    }
}
