//! Typed entry points for the ledger contract.
//!
//! Each variant mirrors one named operation of the deployed contract;
//! serialized calls carry the operation's kebab-case wire name in the
//! `op` tag.

use serde::{Deserialize, Serialize};

use hourbank_store::KvStore;
use hourbank_types::{CallContext, Credits, Principal};

use crate::{LedgerError, TimeCreditLedger};

/// A call into the ledger contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum LedgerCall {
    /// Create `amount` credits for `recipient`. Owner only.
    Mint { amount: Credits, recipient: Principal },
    /// Destroy `amount` credits held by `account`. Owner only.
    Burn { amount: Credits, account: Principal },
    /// Move `amount` credits from `from` to `to`. Sender must be `from`.
    Transfer {
        amount: Credits,
        from: Principal,
        to: Principal,
    },
    /// Read `user`'s balance.
    GetBalance { user: Principal },
}

/// The value carried by a successful ledger call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerValue {
    /// The call succeeded and carries no value.
    Empty,
    /// A balance read.
    Balance(Credits),
}

impl TimeCreditLedger {
    /// Applies one call against `store`, returning its value.
    ///
    /// A failed mutation leaves the store untouched.
    pub fn execute<S: KvStore>(
        &self,
        store: &mut S,
        ctx: &CallContext,
        call: LedgerCall,
    ) -> Result<LedgerValue, LedgerError> {
        match call {
            LedgerCall::Mint { amount, recipient } => {
                self.mint(store, ctx, amount, &recipient)?;
                Ok(LedgerValue::Empty)
            }
            LedgerCall::Burn { amount, account } => {
                self.burn(store, ctx, amount, &account)?;
                Ok(LedgerValue::Empty)
            }
            LedgerCall::Transfer { amount, from, to } => {
                self.transfer(store, ctx, amount, &from, &to)?;
                Ok(LedgerValue::Empty)
            }
            LedgerCall::GetBalance { user } => {
                let balance = self.get_balance(store, &user)?;
                Ok(LedgerValue::Balance(balance))
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
        let call = LedgerCall::GetBalance {
            user: Principal::from("alice"),
        };
        let encoded = serde_json::to_value(&call).unwrap();
        assert_eq!(encoded, json!({ "op": "get-balance", "user": "alice" }));

        let call = LedgerCall::Transfer {
            amount: 30,
            from: Principal::from("alice"),
            to: Principal::from("bob"),
        };
        let encoded = serde_json::to_value(&call).unwrap();
        assert_eq!(
            encoded,
            json!({ "op": "transfer", "amount": 30, "from": "alice", "to": "bob" })
        );
    }

    #[test]
    fn calls_deserialize_from_wire_operation_names() {
        let call: LedgerCall =
            serde_json::from_value(json!({ "op": "mint", "amount": 100, "recipient": "alice" }))
                .unwrap();
        assert_eq!(
            call,
            LedgerCall::Mint {
                amount: 100,
                recipient: Principal::from("alice"),
            }
        );
    }
}
