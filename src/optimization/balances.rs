use crate::core::identity::Identity;
use crate::core::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Net position of a single participant.
///
/// Positive = creditor (is owed money), negative = debtor (owes money).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub identity: Identity,
    pub net: i64,
}

impl Balance {
    pub fn new(identity: Identity, net: i64) -> Self {
        Self { identity, net }
    }

    pub fn standing(&self) -> Standing {
        Standing::of(self.net)
    }
}

/// Which side of the settlement a net balance puts a participant on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Standing {
    Creditor,
    Debtor,
    Settled,
}

impl Standing {
    pub fn of(net: i64) -> Self {
        match net {
            n if n > 0 => Standing::Creditor,
            n if n < 0 => Standing::Debtor,
            _ => Standing::Settled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Standing::Creditor => "Creditor",
            Standing::Debtor => "Debtor",
            Standing::Settled => "Settled",
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Fold transactions into per-participant net balances.
///
/// Every participant seen starts at zero; the debtor side of each
/// transaction loses the amount and the creditor side gains it.
/// Keys iterate in lexicographic order of the normalized identity.
pub fn aggregate(transactions: &[Transaction]) -> BTreeMap<Identity, i64> {
    let mut balances = BTreeMap::new();
    for tx in transactions {
        *balances.entry(tx.from().clone()).or_insert(0) -= tx.amount();
        *balances.entry(tx.to().clone()).or_insert(0) += tx.amount();
    }
    balances
}

/// Drop settled participants, keeping the map's key order.
pub fn non_zero(balances: &BTreeMap<Identity, i64>) -> Vec<Balance> {
    balances
        .iter()
        .filter(|(_, net)| **net != 0)
        .map(|(identity, net)| Balance::new(identity.clone(), *net))
        .collect()
}

/// Conservation check: all balances sum to exactly zero.
pub fn is_balanced(balances: &BTreeMap<Identity, i64>) -> bool {
    balances.values().sum::<i64>() == 0
}

/// Total money that still has to move: the sum of positive balances
/// (equal to the sum of |negative| balances when balanced).
pub fn total_outstanding(balances: &BTreeMap<Identity, i64>) -> i64 {
    balances.values().filter(|v| **v > 0).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::{Ledger, MAX_AMOUNT};

    fn ledger(entries: &[(&str, &str, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (from, to, amount) in entries {
            ledger.record(from, to, *amount).unwrap();
        }
        ledger
    }

    #[test]
    fn test_aggregate_basic() {
        let ledger = ledger(&[("A", "B", 100)]);
        let balances = aggregate(ledger.transactions());

        assert_eq!(balances[&Identity::from("a")], -100);
        assert_eq!(balances[&Identity::from("b")], 100);
        assert!(is_balanced(&balances));
    }

    #[test]
    fn test_aggregate_merges_name_variants() {
        let ledger = ledger(&[("Alice", "bob", 5), (" alice ", "BOB", 5)]);
        let balances = aggregate(ledger.transactions());

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[&Identity::from("alice")], -10);
        assert_eq!(balances[&Identity::from("bob")], 10);
    }

    #[test]
    fn test_circular_debts_cancel() {
        let ledger = ledger(&[("A", "B", 100), ("B", "C", 100), ("C", "A", 100)]);
        let balances = aggregate(ledger.transactions());

        // Perfect cycle: everyone's net position is zero
        assert_eq!(balances.len(), 3);
        assert!(non_zero(&balances).is_empty());
        assert_eq!(total_outstanding(&balances), 0);
    }

    #[test]
    fn test_non_zero_keeps_lexicographic_order() {
        let ledger = ledger(&[("zoe", "mia", 30), ("adam", "mia", 20), ("kim", "zoe", 30)]);
        let balances = aggregate(ledger.transactions());
        let names: Vec<String> = non_zero(&balances)
            .into_iter()
            .map(|b| b.identity.to_string())
            .collect();

        // zoe nets to zero and is dropped
        assert_eq!(names, vec!["adam", "kim", "mia"]);
    }

    #[test]
    fn test_total_outstanding() {
        // A: -100 + 30 = -70, B: +100 - 60 = +40, C: +60 - 30 = +30
        let ledger = ledger(&[("A", "B", 100), ("B", "C", 60), ("C", "A", 30)]);
        let balances = aggregate(ledger.transactions());
        assert_eq!(total_outstanding(&balances), 70);
        assert!(is_balanced(&balances));
    }

    #[test]
    fn test_standing() {
        assert_eq!(Standing::of(40), Standing::Creditor);
        assert_eq!(Standing::of(-1), Standing::Debtor);
        assert_eq!(Standing::of(0), Standing::Settled);
        assert_eq!(Balance::new(Identity::from("a"), i64::MIN).standing(), Standing::Debtor);
        assert_eq!(format!("{:>10}", Standing::Settled), "   Settled");
        assert_eq!(serde_json::to_string(&Standing::Creditor).unwrap(), "\"CREDITOR\"");
    }

    #[test]
    fn test_aggregate_at_maximum_amounts() {
        // One participant owed by many at the largest accepted amount.
        let mut ledger = Ledger::new();
        for name in ["a", "c", "d", "e"] {
            ledger.record(name, "b", MAX_AMOUNT).unwrap();
        }
        let balances = aggregate(ledger.transactions());

        assert_eq!(balances[&Identity::from("b")], 4 * MAX_AMOUNT);
        assert_eq!(balances[&Identity::from("a")], -MAX_AMOUNT);
        assert_eq!(total_outstanding(&balances), 4 * MAX_AMOUNT);
        assert!(is_balanced(&balances));
    }

    #[test]
    fn test_empty_input() {
        let balances = aggregate(&[]);
        assert!(balances.is_empty());
        assert!(is_balanced(&balances));
        assert!(non_zero(&balances).is_empty());
    }
}
