//! The expense group: one ledger plus the settlement derived from it.

use crate::core::identity::Identity;
use crate::core::ledger::{Ledger, ValidationError};
use crate::core::transaction::{Settlement, Transaction};
use crate::optimization::settlement::{SettlementEngine, SettlementResult};
use log::info;
use std::collections::BTreeMap;

/// An expense group being settled.
///
/// Owns the [`Ledger`] and the result of the last [`process`](Self::process)
/// call. Recording, loading or clearing drops the derived result, so
/// [`net_balances`](Self::net_balances) and [`settlements`](Self::settlements)
/// are empty until the next `process`.
///
/// # Examples
///
/// ```
/// use debt_simplifier::group::ExpenseGroup;
///
/// let mut group = ExpenseGroup::new();
/// group.record_transaction("Alice", "Bob", 30).unwrap();
/// group.record_transaction("Bob", "Carol", 30).unwrap();
///
/// let plan = group.process();
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan[0].to_string(), "alice pays carol 30");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpenseGroup {
    ledger: Ledger,
    result: SettlementResult,
    processed: bool,
}

impl ExpenseGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record that `from` owes `to` the given `amount`.
    pub fn record_transaction(
        &mut self,
        from: &str,
        to: &str,
        amount: i64,
    ) -> Result<(), ValidationError> {
        self.ledger.record(from, to, amount)?;
        self.invalidate();
        Ok(())
    }

    /// Compute net balances and the minimized payment plan.
    ///
    /// An empty ledger is a no-op that yields an empty plan.
    pub fn process(&mut self) -> &[Settlement] {
        if self.ledger.is_empty() {
            info!("no transactions to process");
            self.invalidate();
            return &[];
        }
        self.result = SettlementEngine::settle(self.ledger.transactions());
        self.processed = true;
        self.result.settlements()
    }

    /// Net balances from the last `process`, settled participants included.
    pub fn net_balances(&self) -> &BTreeMap<Identity, i64> {
        self.result.balances()
    }

    /// The payment plan from the last `process`.
    pub fn settlements(&self) -> &[Settlement] {
        self.result.settlements()
    }

    pub fn original_transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// The full result of the last `process`, if it is still current.
    pub fn last_result(&self) -> Option<&SettlementResult> {
        self.processed.then_some(&self.result)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.count()
    }

    pub fn settlement_count(&self) -> usize {
        self.result.settlement_count()
    }

    /// Drop every transaction and any derived state.
    pub fn clear(&mut self) {
        self.ledger.clear();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.result = SettlementResult::default();
        self.processed = false;
    }
}
