use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub proposer: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignUpdatedEvent {
    pub campaign_id: CampaignId,
    pub proposer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceivedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
    pub total_donations: i128,
}

/// Published when a donation overshoots the goal. `surplus` was not credited.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationCappedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub offered: i128,
    pub surplus: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignDeletedEvent {
    pub campaign_id: CampaignId,
    pub proposer: Address,
    pub total_donations: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_updated(env: &Env, event: CampaignUpdatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_updated"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events().publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_donation_capped(env: &Env, event: DonationCappedEvent) {
    env.events().publish((Symbol::new(env, "donation_capped"),), event);
}

pub fn emit_campaign_deleted(env: &Env, event: CampaignDeletedEvent) {
    env.events().publish((Symbol::new(env, "campaign_deleted"),), event);
}
