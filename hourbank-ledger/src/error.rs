use hourbank_store::StoreError;
use hourbank_types::{Credits, Principal};
use thiserror::Error;

/// Errors returned by time-credit ledger operations.
///
/// A failed operation writes nothing to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The sender is not allowed to perform the operation. Checked
    /// before any balance inspection.
    #[error("Not authorized: {sender} may not perform this ledger operation")]
    NotAuthorized { sender: Principal },

    /// The debited account holds fewer credits than required.
    #[error("Insufficient balance: {account} holds {available} credits, needs {required}")]
    InsufficientBalance {
        account: Principal,
        available: Credits,
        required: Credits,
    },

    /// Crediting the account would overflow its balance.
    #[error("Arithmetic overflow while crediting {account}")]
    ArithmeticOverflow { account: Principal },

    /// The backing store failed to encode or decode a value.
    #[error(transparent)]
    Store(#[from] StoreError),
}
