//! Typed entry points for the governance contract.
//!
//! Each variant mirrors one named operation of the deployed contract;
//! serialized calls carry the operation's kebab-case wire name in the
//! `op` tag.

use serde::{Deserialize, Serialize};

use hourbank_store::KvStore;
use hourbank_types::{CallContext, Principal, ProposalId};

use crate::{CommunityGovernance, GovernanceError, Proposal, VoteRecord};

/// A call into the governance contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum GovernanceCall {
    /// Open a new proposal. Always succeeds.
    CreateProposal {
        description: String,
        voting_period: u64,
    },
    /// Vote on an open proposal, once per principal.
    Vote {
        proposal_id: ProposalId,
        support: bool,
    },
    /// Resolve a proposal whose voting window has closed.
    EndProposal { proposal_id: ProposalId },
    /// Read a proposal record.
    GetProposal { proposal_id: ProposalId },
    /// Read one principal's vote on a proposal.
    GetVote {
        proposal_id: ProposalId,
        voter: Principal,
    },
}

/// The value carried by a successful governance call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceValue {
    /// The call succeeded and carries no value.
    Empty,
    /// The id assigned to a newly created proposal.
    ProposalId(ProposalId),
    /// A proposal read; `None` when the id is unknown.
    Proposal(Option<Proposal>),
    /// A vote read; `None` when no vote is recorded.
    Vote(Option<VoteRecord>),
}

impl CommunityGovernance {
    /// Applies one call against `store`, returning its value.
    ///
    /// A failed mutation leaves the store untouched.
    pub fn execute<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        call: GovernanceCall,
    ) -> Result<GovernanceValue, GovernanceError> {
        match call {
            GovernanceCall::CreateProposal {
                description,
                voting_period,
            } => {
                let id = self.create_proposal(store, ctx, description, voting_period)?;
                Ok(GovernanceValue::ProposalId(id))
            }
            GovernanceCall::Vote {
                proposal_id,
                support,
            } => {
                self.cast_vote(store, ctx, proposal_id, support)?;
                Ok(GovernanceValue::Empty)
            }
            GovernanceCall::EndProposal { proposal_id } => {
                self.end_proposal(store, ctx, proposal_id)?;
                Ok(GovernanceValue::Empty)
            }
            GovernanceCall::GetProposal { proposal_id } => {
                let proposal = self.get_proposal(store, proposal_id)?;
                Ok(GovernanceValue::Proposal(proposal))
            }
            GovernanceCall::GetVote { proposal_id, voter } => {
                let vote = self.get_vote(store, proposal_id, &voter)?;
                Ok(GovernanceValue::Vote(vote))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn calls_serialize_with_wire_operation_names() {
        let call = GovernanceCall::CreateProposal {
            description: "Fund the tool library".to_string(),
            voting_period: 100,
        };
        let encoded = serde_json::to_value(&call).unwrap();
        assert_eq!(
            encoded,
            json!({
                "op": "create-proposal",
                "description": "Fund the tool library",
                "voting_period": 100
            })
        );

        let call = GovernanceCall::EndProposal { proposal_id: 1 };
        let encoded = serde_json::to_value(&call).unwrap();
        assert_eq!(encoded, json!({ "op": "end-proposal", "proposal_id": 1 }));
    }

    #[test]
    fn calls_deserialize_from_wire_operation_names() {
        let call: GovernanceCall = serde_json::from_value(json!({
            "op": "vote",
            "proposal_id": 2,
            "support": false
        }))
        .unwrap();
        assert_eq!(
            call,
            GovernanceCall::Vote {
                proposal_id: 2,
                support: false,
            }
        );
    }
}
