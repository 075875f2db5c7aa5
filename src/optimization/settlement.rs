use crate::core::identity::Identity;
use crate::core::transaction::{Settlement, Transaction};
use crate::optimization::balances::{self, Balance};
use log::{debug, error, info};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of settling a set of transactions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettlementResult {
    /// Net balance of every participant, settled ones included.
    balances: BTreeMap<Identity, i64>,
    /// The minimized payment plan, in emission order.
    settlements: Vec<Settlement>,
    /// Number of transactions that went in.
    original_count: usize,
    /// Sum of all original amounts.
    gross_total: i64,
    /// Sum of positive balances; the money the plan actually moves.
    outstanding_total: i64,
}

impl SettlementResult {
    pub fn balances(&self) -> &BTreeMap<Identity, i64> {
        &self.balances
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    /// Net balance of one participant; zero if they never appeared.
    pub fn net_balance(&self, identity: &Identity) -> i64 {
        self.balances.get(identity).copied().unwrap_or(0)
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn settlement_count(&self) -> usize {
        self.settlements.len()
    }

    /// Participants whose balance is not zero.
    pub fn unsettled_count(&self) -> usize {
        self.balances.values().filter(|v| **v != 0).count()
    }

    pub fn gross_total(&self) -> i64 {
        self.gross_total
    }

    pub fn outstanding_total(&self) -> i64 {
        self.outstanding_total
    }

    /// Share of the original transactions the plan eliminates, in percent.
    pub fn reduction_percent(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        let removed = self.original_count as f64 - self.settlements.len() as f64;
        removed * 100.0 / self.original_count as f64
    }

    /// Balances conserve to zero and replaying the plan zeroes everyone.
    pub fn is_valid(&self) -> bool {
        if !balances::is_balanced(&self.balances) {
            return false;
        }
        let mut replay = self.balances.clone();
        for s in &self.settlements {
            if s.amount <= 0 {
                return false;
            }
            *replay.entry(s.from.clone()).or_insert(0) += s.amount;
            *replay.entry(s.to.clone()).or_insert(0) -= s.amount;
        }
        replay.values().all(|v| *v == 0)
    }
}

/// The greedy settlement engine.
///
/// Repeatedly matches the largest creditor against the largest debtor.
/// Each step zeroes at least one of the two, so `N` non-zero balances
/// settle in at most `N - 1` payments. The plan is not guaranteed to be the
/// global minimum; finding that is a subset-sum style search this engine
/// does not attempt.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Aggregate, filter and minimize in one pass over `transactions`.
    pub fn settle(transactions: &[Transaction]) -> SettlementResult {
        let balances = balances::aggregate(transactions);
        let mut working = balances::non_zero(&balances);
        let settlements = Self::minimize(&mut working);

        let gross_total = transactions.iter().map(|t| t.amount()).sum();
        let outstanding_total = balances::total_outstanding(&balances);

        info!(
            "settled {} transactions across {} participants into {} payments",
            transactions.len(),
            balances.len(),
            settlements.len()
        );

        SettlementResult {
            balances,
            settlements,
            original_count: transactions.len(),
            gross_total,
            outstanding_total,
        }
    }

    /// Run the greedy matching loop over `balances`, mutating them in place.
    ///
    /// # Algorithm
    ///
    /// 1. Stop once every balance is zero.
    /// 2. Creditor = first index holding the largest positive balance.
    /// 3. Debtor = first index holding the most negative balance.
    /// 4. Debtor pays creditor `min(credit, -debt)`; both move toward zero.
    ///
    /// The loop is capped at `balances.len()` passes. A balanced input
    /// never reaches the cap; if it does, the partial plan is returned.
    pub fn minimize(balances: &mut [Balance]) -> Vec<Settlement> {
        let mut settlements = Vec::new();

        for _ in 0..balances.len() {
            if balances.iter().all(|b| b.net == 0) {
                return settlements;
            }

            let (Some(creditor), Some(debtor)) = (max_creditor(balances), max_debtor(balances))
            else {
                break;
            };

            // `unsigned_abs` keeps `i64::MIN` debts from overflowing on negation.
            let credit = balances[creditor].net;
            let amount = i64::try_from(balances[debtor].net.unsigned_abs())
                .map_or(credit, |debt| credit.min(debt));
            let settlement = Settlement::new(
                balances[debtor].identity.clone(),
                balances[creditor].identity.clone(),
                amount,
            );
            debug!("{}", settlement);
            settlements.push(settlement);

            balances[creditor].net -= amount;
            balances[debtor].net += amount;
        }

        if balances.iter().any(|b| b.net != 0) {
            error!(
                "settlement stopped after {} payments with unbalanced positions left",
                settlements.len()
            );
        }
        settlements
    }
}

/// Index of the first strictly largest positive balance.
fn max_creditor(balances: &[Balance]) -> Option<usize> {
    let mut index = None;
    let mut max = 0;
    for (i, b) in balances.iter().enumerate() {
        if b.net > max {
            max = b.net;
            index = Some(i);
        }
    }
    index
}

/// Index of the first strictly most negative balance.
fn max_debtor(balances: &[Balance]) -> Option<usize> {
    let mut index = None;
    let mut min = 0;
    for (i, b) in balances.iter().enumerate() {
        if b.net < min {
            min = b.net;
            index = Some(i);
        }
    }
    index
}

impl std::fmt::Display for SettlementResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Settlement Result ===")?;
        writeln!(f, "Transactions:   {}", self.original_count)?;
        writeln!(f, "Payments:       {}", self.settlements.len())?;
        writeln!(f, "Reduction:      {:.1}%", self.reduction_percent())?;
        writeln!(f, "Gross Total:    {}", self.gross_total)?;
        writeln!(f, "Outstanding:    {}", self.outstanding_total)?;
        writeln!(f, "Valid:          {}", self.is_valid())?;
        Ok(())
    }
}
