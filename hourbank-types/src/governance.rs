use serde::{Deserialize, Serialize};

use crate::{BlockHeight, Principal, ProposalId};

/// Represents a community proposal tracked by the governance component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// The unique identifier of this proposal
    pub id: ProposalId,
    /// The principal that created the proposal
    pub proposer: Principal,
    /// Free-form description of the proposed change
    pub description: String,
    /// Number of principals that voted in favor
    pub votes_for: u64,
    /// Number of principals that voted against
    pub votes_against: u64,
    /// The lifecycle status of the proposal (active, passed, rejected)
    pub status: ProposalStatus,
    /// The first block height at which voting is closed and the
    /// proposal may be resolved
    pub end_height: BlockHeight,
}

/// Represents the lifecycle status of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Open for voting until the end height is reached
    Active,
    /// Resolved with more votes in favor than against
    Passed,
    /// Resolved with a tie or a majority against
    Rejected,
}

/// Represents the recorded vote of a single principal on one proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// The principal that cast the vote
    pub voter: Principal,
    /// True for a vote in favor, false for a vote against
    pub support: bool,
}
