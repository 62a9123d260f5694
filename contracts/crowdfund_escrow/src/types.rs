//! # Types
//!
//! Shared data structures used across all modules of the escrow contract.
//!
//! ## Config / State split
//!
//! A campaign is stored as two separate ledger entries:
//!
//! - [`CampaignConfig`]: written once at creation and never mutated.
//! - [`CampaignState`]: written on contribution, finalization, withdrawal and
//!   refund.
//!
//! The public API returns the reconstructed [`Campaign`].
//!
//! ## Lifecycle
//!
//! ```text
//! Open ──► AwaitingFinalization ──► Successful ──► Withdrawn
//!                               └─► Failed  (refunds, per contributor)
//! ```
//!
//! [`CampaignStatus`] is derived from state and ledger time on read. It is
//! never stored, so it cannot drift from the flags it summarises.

use soroban_sdk::{contracttype, Address, String};

/// Reward units credited per unit of the custody token contributed.
pub const REWARD_RATE: i128 = 100;

/// Protocol-wide wiring, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolConfig {
    /// Address allowed to pause intake and hand over administration.
    pub admin: Address,
    /// Stellar Asset Contract held in custody for every campaign.
    pub token: Address,
    /// Reward contract whose minter is this contract.
    pub rewards: Address,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub goal: i128,
    pub deadline: u64,
}

/// Mutable campaign state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CampaignState {
    pub total_raised: i128,
    pub finalized: bool,
    pub successful: bool,
    pub withdrawn: bool,
    pub total_refunded: i128,
}

/// Full snapshot of a campaign, as returned by `get_campaign`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential id, starting at 0.
    pub id: u64,
    /// Address that created the campaign and alone may withdraw on success.
    pub creator: Address,
    pub title: String,
    /// Funding target in custody-token units. Always positive.
    pub goal: i128,
    /// Ledger timestamp at which contributions close.
    pub deadline: u64,
    /// Historical sum of contributions. Refunds do not decrease it.
    pub total_raised: i128,
    pub finalized: bool,
    /// Meaningful only once `finalized`; fixed at finalization.
    pub successful: bool,
    pub withdrawn: bool,
    /// Sum of refunds paid out so far.
    pub total_refunded: i128,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            creator: config.creator,
            title: config.title,
            goal: config.goal,
            deadline: config.deadline,
            total_raised: state.total_raised,
            finalized: state.finalized,
            successful: state.successful,
            withdrawn: state.withdrawn,
            total_refunded: state.total_refunded,
        }
    }
}

/// Derived lifecycle position of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Before the deadline; accepting contributions.
    Open,
    /// Deadline passed, `finalize_campaign` not yet called.
    AwaitingFinalization,
    /// Goal reached; the creator has not withdrawn yet.
    Successful,
    /// Goal missed; contributors may claim refunds.
    Failed,
    /// Goal reached and funds paid to the creator.
    Withdrawn,
}

impl CampaignStatus {
    pub fn derive(deadline: u64, state: &CampaignState, now: u64) -> Self {
        if !state.finalized {
            if now < deadline {
                CampaignStatus::Open
            } else {
                CampaignStatus::AwaitingFinalization
            }
        } else if !state.successful {
            CampaignStatus::Failed
        } else if state.withdrawn {
            CampaignStatus::Withdrawn
        } else {
            CampaignStatus::Successful
        }
    }
}
