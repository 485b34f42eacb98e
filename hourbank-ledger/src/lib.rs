//! Hourbank Time-Credit Ledger
//!
//! Tracks hour-denominated credit balances for community members. The
//! contract owner mints and burns credits; members transfer credits
//! they hold. Balances live in an external [`KvStore`] under
//! `balance:<principal>` keys and read as zero when absent.

pub mod calls;
pub mod error;

pub use calls::{LedgerCall, LedgerValue};
pub use error::LedgerError;

use hourbank_store::{encode_value, get_value, put_value, KvStore};
use hourbank_types::{CallContext, Credits, Principal};
use log::debug;

const BALANCE_PREFIX: &str = "balance:";

/// Returns the store key holding `user`'s balance.
pub fn balance_key(user: &Principal) -> String {
    format!("{}{}", BALANCE_PREFIX, user)
}

/// Represents the time-credit ledger contract.
///
/// The owner principal is fixed at construction and is the only
/// identity allowed to mint or burn credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCreditLedger {
    owner: Principal,
}

impl TimeCreditLedger {
    /// Creates a ledger administered by `owner`.
    pub fn new(owner: impl Into<Principal>) -> Self {
        TimeCreditLedger {
            owner: owner.into(),
        }
    }

    /// Returns the principal allowed to mint and burn.
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Creates `amount` credits for `recipient`. Owner only.
    ///
    /// Fails with [`LedgerError::ArithmeticOverflow`] if the recipient
    /// balance would exceed `u64::MAX`.
    pub fn mint<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        amount: Credits,
        recipient: &Principal,
    ) -> Result<(), LedgerError> {
        if ctx.sender != self.owner {
            return Err(LedgerError::NotAuthorized {
                sender: ctx.sender.clone(),
            });
        }
        let key = balance_key(recipient);
        let balance: Credits = get_value(store, &key)?.unwrap_or(0);
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::ArithmeticOverflow {
                account: recipient.clone(),
            })?;
        put_value(store, &key, &updated)?;
        debug!(
            "Minted {} credits to {} (balance now {})",
            amount, recipient, updated
        );
        Ok(())
    }

    /// Destroys `amount` credits held by `account`. Owner only.
    ///
    /// Authority is checked before the balance, so a non-owner burn
    /// fails [`LedgerError::NotAuthorized`] even when the balance is
    /// also too small.
    pub fn burn<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        amount: Credits,
        account: &Principal,
    ) -> Result<(), LedgerError> {
        if ctx.sender != self.owner {
            return Err(LedgerError::NotAuthorized {
                sender: ctx.sender.clone(),
            });
        }
        let key = balance_key(account);
        let balance: Credits = get_value(store, &key)?.unwrap_or(0);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: account.clone(),
                available: balance,
                required: amount,
            });
        }
        let updated = balance - amount;
        put_value(store, &key, &updated)?;
        debug!(
            "Burned {} credits from {} (balance now {})",
            amount, account, updated
        );
        Ok(())
    }

    /// Moves `amount` credits from `from` to `to`.
    ///
    /// The sender must be `from`; any principal may receive. A
    /// self-transfer is allowed and leaves the balance unchanged.
    pub fn transfer<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        amount: Credits,
        from: &Principal,
        to: &Principal,
    ) -> Result<(), LedgerError> {
        if ctx.sender != *from {
            return Err(LedgerError::NotAuthorized {
                sender: ctx.sender.clone(),
            });
        }
        let from_key = balance_key(from);
        let to_key = balance_key(to);
        let from_balance: Credits = get_value(store, &from_key)?.unwrap_or(0);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from.clone(),
                available: from_balance,
                required: amount,
            });
        }
        let debited = from_balance - amount;
        // When both sides are the same key the credit must start from
        // the debited value, not the stale read.
        let to_balance: Credits = if from == to {
            debited
        } else {
            get_value(store, &to_key)?.unwrap_or(0)
        };
        let credited = to_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::ArithmeticOverflow {
                account: to.clone(),
            })?;
        let from_bytes = encode_value(&from_key, &debited)?;
        let to_bytes = encode_value(&to_key, &credited)?;
        store.put(&from_key, from_bytes);
        store.put(&to_key, to_bytes);
        debug!(
            "Transferred {} credits from {} to {}",
            amount, from, to
        );
        Ok(())
    }

    /// Returns `user`'s balance. Principals never seen read as zero.
    pub fn get_balance<S: KvStore>(
        &self,
        store: &S,
        user: &Principal,
    ) -> Result<Credits, LedgerError> {
        Ok(get_value(store, &balance_key(user))?.unwrap_or(0))
    }
}
