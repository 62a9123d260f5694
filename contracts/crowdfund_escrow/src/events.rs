use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
    pub reward: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinalized {
    pub campaign_id: u64,
    pub total_raised: i128,
    pub successful: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub campaign_id: u64,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRefunded {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, campaign_id: u64, creator: Address, goal: i128, deadline: u64) {
    let topics = (symbol_short!("created"), campaign_id);
    let data = CampaignCreated {
        campaign_id,
        creator,
        goal,
        deadline,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution_made(env: &Env, campaign_id: u64, contributor: Address, amount: i128, reward: i128) {
    let topics = (symbol_short!("contrib"), campaign_id);
    let data = ContributionMade {
        campaign_id,
        contributor,
        amount,
        reward,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_finalized(env: &Env, campaign_id: u64, total_raised: i128, successful: bool) {
    let topics = (symbol_short!("finalized"), campaign_id);
    let data = CampaignFinalized {
        campaign_id,
        total_raised,
        successful,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_withdrawn(env: &Env, campaign_id: u64, creator: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), campaign_id);
    let data = FundsWithdrawn {
        campaign_id,
        creator,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution_refunded(env: &Env, campaign_id: u64, contributor: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), campaign_id);
    let data = ContributionRefunded {
        campaign_id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_protocol_paused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("paused"),), admin);
}

pub fn emit_protocol_unpaused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("unpaused"),), admin);
}
