use hourbank_store::StoreError;
use hourbank_types::{Principal, ProposalId};
use thiserror::Error;

/// Errors returned by governance operations.
///
/// A failed operation writes nothing to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernanceError {
    /// The proposal does not exist or its voting window has closed.
    #[error("Invalid proposal or voting period ended (proposal {0})")]
    InvalidOrExpired(ProposalId),

    /// The sender already holds a vote record for this proposal.
    #[error("Already voted: {voter} has a recorded vote on proposal {proposal_id}")]
    AlreadyVoted {
        proposal_id: ProposalId,
        voter: Principal,
    },

    /// The proposal does not exist, is still open for voting, or was
    /// already resolved.
    #[error("Invalid proposal or voting period not ended (proposal {0})")]
    InvalidOrNotEnded(ProposalId),

    /// The backing store failed to encode or decode a value.
    #[error(transparent)]
    Store(#[from] StoreError),
}
