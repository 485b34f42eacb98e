use serde::{Deserialize, Serialize};

pub type Credits = u64;
pub type BlockHeight = u64;
pub type ProposalId = u64;

/// Represents the opaque identity of an account or caller.
///
/// Principals are compared byte-for-byte; the components attach no
/// meaning to their contents beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Principal(id.into())
    }

    /// Returns the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Principal(id.to_string())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Principal(id)
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Represents the trusted environment of a single call.
///
/// The hosting environment authenticates the sender and supplies the
/// current block height. Heights never decrease between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The authenticated principal making the call
    pub sender: Principal,
    /// The block height at which the call is applied
    pub height: BlockHeight,
}

impl CallContext {
    pub fn new(sender: impl Into<Principal>, height: BlockHeight) -> Self {
        CallContext {
            sender: sender.into(),
            height,
        }
    }
}

pub mod governance;

// Re-export commonly used types
pub use governance::{Proposal, ProposalStatus, VoteRecord};
