use crate::core::identity::Identity;
use crate::core::transaction::Transaction;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

/// Largest amount a single transaction may carry.
///
/// Balances accumulate in `i64`, so with amounts capped at `i32::MAX` no
/// realistic number of transactions can overflow a balance or a total.
pub const MAX_AMOUNT: i64 = i32::MAX as i64;

/// Reasons the ledger refuses a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(i64),
    #[error("amount {0} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    AmountTooLarge(i64),
    #[error("participant names cannot be empty")]
    EmptyIdentity,
    #[error("sender and receiver cannot be the same person")]
    SelfTransaction,
}

/// The list of debts recorded for an expense group.
///
/// Every entry has passed validation and carries normalized identities,
/// so nothing downstream ever sees raw casing or padding again.
/// Rejected entries never change the ledger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `from` owes `to` the given `amount`.
    ///
    /// Checks run in order: positive amount, amount within [`MAX_AMOUNT`],
    /// non-empty names, distinct names.
    pub fn record(&mut self, from: &str, to: &str, amount: i64) -> Result<(), ValidationError> {
        match Self::validate(from, to, amount) {
            Ok((from, to)) => {
                debug!("recorded {} owes {} {}", from, to, amount);
                self.transactions.push(Transaction::new(from, to, amount));
                Ok(())
            }
            Err(err) => {
                warn!("rejected {:?} -> {:?} ({}): {}", from, to, amount, err);
                Err(err)
            }
        }
    }

    fn validate(from: &str, to: &str, amount: i64) -> Result<(Identity, Identity), ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(amount));
        }
        let from = Identity::normalize(from);
        let to = Identity::normalize(to);
        if from.is_empty() || to.is_empty() {
            return Err(ValidationError::EmptyIdentity);
        }
        if from == to {
            return Err(ValidationError::SelfTransaction);
        }
        Ok((from, to))
    }

    /// Drop every stored transaction.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of all recorded amounts.
    pub fn gross_total(&self) -> i64 {
        self.transactions.iter().map(|t| t.amount()).sum()
    }

    /// Every participant referenced by the ledger, sorted and deduplicated.
    pub fn participants(&self) -> Vec<Identity> {
        let mut participants: Vec<Identity> = self
            .transactions
            .iter()
            .flat_map(|t| [t.from().clone(), t.to().clone()])
            .collect();
        participants.sort();
        participants.dedup();
        participants
    }
}
