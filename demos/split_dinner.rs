//! Settling a shared dinner and weekend trip.
//!
//! Shows how five IOUs between four friends collapse into a shorter
//! payment plan, and how name variants are merged.

use debt_simplifier::group::ExpenseGroup;
use debt_simplifier::report::{BalanceTable, ReportConfig, SettlementTable, TransactionTable};

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  debt-simplifier: Splitting a Dinner Bill ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let mut group = ExpenseGroup::new();
    let config = ReportConfig::default();

    // Names are matched case-insensitively, ignoring padding.
    let entries = [
        ("Alice", "Bob", 100),
        ("Bob", "Charlie", 50),
        ("charlie ", "ALICE", 30),
        ("David", "Alice", 20),
        ("Bob", "david", 10),
    ];
    for (from, to, amount) in entries {
        if let Err(e) = group.record_transaction(from, to, amount) {
            println!("  skipped {} → {}: {}", from, to, e);
        }
    }

    // Rejected entries never reach the ledger.
    for (from, to, amount) in [("Eve", "eve", 15), ("Eve", "Bob", 0), ("", "Bob", 5)] {
        if let Err(e) = group.record_transaction(from, to, amount) {
            println!("  rejected {:?} → {:?} {}: {}", from, to, amount, e);
        }
    }
    println!();

    println!("━━━ What was recorded ━━━\n");
    println!(
        "{}",
        TransactionTable {
            transactions: group.original_transactions(),
            config: &config,
        }
    );

    group.process();

    println!("━━━ Who is up, who is down ━━━\n");
    println!(
        "{}",
        BalanceTable {
            balances: group.net_balances()
        }
    );

    println!("━━━ The payment plan ━━━\n");
    if let Some(result) = group.last_result() {
        println!(
            "{}",
            SettlementTable {
                result,
                config: &config,
            }
        );
        println!("{}", result);
    }

    println!("━━━ Interpretation ━━━\n");
    println!("  Only net balances matter. Anyone whose receipts equal their");
    println!("  payments drops out, and the rest settle by matching the largest");
    println!("  creditor with the largest debtor until everyone is even.");
}
