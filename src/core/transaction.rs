use crate::core::identity::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded debt: `from` owes `to` the given `amount`.
///
/// Transactions are only created by the [`Ledger`](crate::core::ledger::Ledger)
/// after validation, so both identities are non-empty and distinct and the
/// amount is positive and at most
/// [`MAX_AMOUNT`](crate::core::ledger::MAX_AMOUNT). They are immutable once
/// created.
///
/// # Examples
///
/// ```
/// use debt_simplifier::core::ledger::Ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.record("Alice", "Bob", 100).unwrap();
///
/// let tx = &ledger.transactions()[0];
/// assert_eq!(tx.from().as_str(), "alice");
/// assert_eq!(tx.to().as_str(), "bob");
/// assert_eq!(tx.amount(), 100);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    /// The participant who owes.
    from: Identity,
    /// The participant who is owed.
    to: Identity,
    /// Always in `1..=MAX_AMOUNT`.
    amount: i64,
}

impl Transaction {
    pub(crate) fn new(from: Identity, to: Identity, amount: i64) -> Self {
        Self { from, to, amount }
    }

    // --- Accessors ---

    pub fn from(&self) -> &Identity {
        &self.from
    }

    pub fn to(&self) -> &Identity {
        &self.to
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

/// One payment in a minimized settlement plan: `from` pays `to` `amount`.
///
/// Produced only by the
/// [`SettlementEngine`](crate::optimization::settlement::SettlementEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: Identity,
    pub to: Identity,
    pub amount: i64,
}

impl Settlement {
    pub fn new(from: Identity, to: Identity, amount: i64) -> Self {
        Self { from, to, amount }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_creation() {
        let tx = Transaction::new(Identity::from("a"), Identity::from("b"), 1000);
        assert_eq!(tx.from().as_str(), "a");
        assert_eq!(tx.to().as_str(), "b");
        assert_eq!(tx.amount(), 1000);
    }

    #[test]
    fn test_settlement_display() {
        let s = Settlement::new(Identity::from("Bob"), Identity::from("Alice"), 40);
        assert_eq!(s.to_string(), "bob pays alice 40");
    }
}
