//! Random expense groups for benchmarks and stress runs.

use crate::core::ledger::Ledger;
use log::warn;
use rand::Rng;

/// Configuration for generating a random expense group.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    /// Number of participants.
    pub participant_count: usize,
    /// Number of transactions to record.
    pub transaction_count: usize,
    /// Smallest amount, inclusive.
    pub min_amount: i64,
    /// Largest amount, inclusive.
    pub max_amount: i64,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            participant_count: 10,
            transaction_count: 30,
            min_amount: 1,
            max_amount: 1_000,
        }
    }
}

/// Generate a ledger of random debts between distinct participants.
///
/// Fewer than two participants cannot owe each other anything, so the
/// ledger comes back empty.
pub fn generate_random_group(config: &GroupConfig) -> Ledger {
    let mut rng = rand::thread_rng();
    let mut ledger = Ledger::new();

    if config.participant_count < 2 {
        return ledger;
    }

    let participants: Vec<String> = (0..config.participant_count)
        .map(|i| format!("person-{:03}", i))
        .collect();

    let min = config.min_amount.max(1);
    let max = config.max_amount.max(min);

    for _ in 0..config.transaction_count {
        let from = rng.gen_range(0..participants.len());
        let mut to = rng.gen_range(0..participants.len());
        while to == from {
            to = rng.gen_range(0..participants.len());
        }
        let amount = rng.gen_range(min..=max);

        if let Err(err) = ledger.record(&participants[from], &participants[to], amount) {
            warn!("generated entry rejected: {}", err);
        }
    }

    ledger
}
