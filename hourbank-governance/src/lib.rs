//! Hourbank Community Governance
//!
//! This crate implements the proposal and voting contract for the
//! Hourbank community: members open proposals, vote once each during a
//! block-height window, and anyone may resolve a proposal once the
//! window has closed.

pub mod calls;
pub mod error;

pub use calls::{GovernanceCall, GovernanceValue};
pub use error::GovernanceError;

// Re-export commonly used types
pub use hourbank_types::governance::{Proposal, ProposalStatus, VoteRecord};

use hourbank_store::{encode_value, get_value, put_value, KvStore};
use hourbank_types::{CallContext, Principal, ProposalId};
use log::{debug, info};

const PROPOSAL_PREFIX: &str = "proposal:";
const VOTE_PREFIX: &str = "vote:";

/// Singleton store key holding the id of the most recently created
/// proposal. Absent reads as zero, so the first proposal gets id 1.
pub const PROPOSAL_NONCE_KEY: &str = "proposalNonce";

/// Returns the store key holding proposal `id`.
pub fn proposal_key(id: ProposalId) -> String {
    format!("{}{}", PROPOSAL_PREFIX, id)
}

/// Returns the store key recording `voter`'s vote on proposal `id`.
pub fn vote_key(id: ProposalId, voter: &Principal) -> String {
    format!("{}{}:{}", VOTE_PREFIX, id, voter)
}

/// Represents the community governance contract.
///
/// All proposal and vote records live in the external store, so the
/// contract value itself is stateless and freely copyable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommunityGovernance;

impl CommunityGovernance {
    pub fn new() -> Self {
        CommunityGovernance
    }

    /// Opens a new proposal for voting and returns its id.
    ///
    /// Any principal may propose; the description and voting period
    /// are not validated, so creation always succeeds. Ids come from a
    /// store-resident nonce and are never reused. The voting window
    /// closes at `ctx.height + voting_period` (saturating).
    pub fn create_proposal<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        description: impl Into<String>,
        voting_period: u64,
    ) -> Result<ProposalId, GovernanceError> {
        let nonce: ProposalId = get_value(store, PROPOSAL_NONCE_KEY)?.unwrap_or(0);
        let id = nonce + 1;
        let proposal = Proposal {
            id,
            proposer: ctx.sender.clone(),
            description: description.into(),
            votes_for: 0,
            votes_against: 0,
            status: ProposalStatus::Active,
            end_height: ctx.height.saturating_add(voting_period),
        };
        let key = proposal_key(id);
        let nonce_bytes = encode_value(PROPOSAL_NONCE_KEY, &id)?;
        let proposal_bytes = encode_value(&key, &proposal)?;
        store.put(PROPOSAL_NONCE_KEY, nonce_bytes);
        store.put(&key, proposal_bytes);
        info!(
            "Proposal {} created by {} (voting closes at height {})",
            id, ctx.sender, proposal.end_height
        );
        Ok(id)
    }

    /// Records `ctx.sender`'s vote on a proposal.
    ///
    /// One vote per principal per proposal, accepted strictly before
    /// the proposal's end height. The stored status is not consulted;
    /// the height gate alone closes the window.
    pub fn cast_vote<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        proposal_id: ProposalId,
        support: bool,
    ) -> Result<(), GovernanceError> {
        let key = proposal_key(proposal_id);
        let mut proposal: Proposal =
            get_value(store, &key)?.ok_or(GovernanceError::InvalidOrExpired(proposal_id))?;
        if ctx.height >= proposal.end_height {
            return Err(GovernanceError::InvalidOrExpired(proposal_id));
        }
        let ballot_key = vote_key(proposal_id, &ctx.sender);
        // The record's existence is the guard; its contents are not read.
        if store.exists(&ballot_key) {
            return Err(GovernanceError::AlreadyVoted {
                proposal_id,
                voter: ctx.sender.clone(),
            });
        }
        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        let record = VoteRecord {
            voter: ctx.sender.clone(),
            support,
        };
        let record_bytes = encode_value(&ballot_key, &record)?;
        let proposal_bytes = encode_value(&key, &proposal)?;
        store.put(&ballot_key, record_bytes);
        store.put(&key, proposal_bytes);
        debug!(
            "Vote cast on proposal {} by {} (for: {}, against: {})",
            proposal_id, ctx.sender, proposal.votes_for, proposal.votes_against
        );
        Ok(())
    }

    /// Resolves a proposal whose voting window has closed.
    ///
    /// Anyone may call this once the end height is reached. More votes
    /// for than against passes the proposal; a tie rejects it. Each
    /// proposal resolves at most once.
    pub fn end_proposal<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        proposal_id: ProposalId,
    ) -> Result<ProposalStatus, GovernanceError> {
        let key = proposal_key(proposal_id);
        let mut proposal: Proposal =
            get_value(store, &key)?.ok_or(GovernanceError::InvalidOrNotEnded(proposal_id))?;
        if ctx.height < proposal.end_height || proposal.status != ProposalStatus::Active {
            return Err(GovernanceError::InvalidOrNotEnded(proposal_id));
        }
        let outcome = if proposal.votes_for > proposal.votes_against {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        };
        proposal.status = outcome;
        put_value(store, &key, &proposal)?;
        info!(
            "Proposal {} resolved as {:?} ({} for, {} against)",
            proposal_id, outcome, proposal.votes_for, proposal.votes_against
        );
        Ok(outcome)
    }

    /// Looks up a proposal. Unknown ids read as `None`.
    pub fn get_proposal<S: KvStore>(
        &self,
        store: &S,
        proposal_id: ProposalId,
    ) -> Result<Option<Proposal>, GovernanceError> {
        Ok(get_value(store, &proposal_key(proposal_id))?)
    }

    /// Looks up `voter`'s recorded vote on a proposal, if any.
    pub fn get_vote<S: KvStore>(
        &self,
        store: &S,
        proposal_id: ProposalId,
        voter: &Principal,
    ) -> Result<Option<VoteRecord>, GovernanceError> {
        Ok(get_value(store, &vote_key(proposal_id, voter))?)
    }
}
