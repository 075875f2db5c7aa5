//! Console tables for transactions, balances and settlement plans.

use crate::core::identity::Identity;
use crate::core::transaction::Transaction;
use crate::optimization::balances::Standing;
use crate::optimization::settlement::SettlementResult;
use std::collections::BTreeMap;
use std::fmt;

/// Presentation settings shared by the console tables and the result file.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Printed before amounts in console tables.
    pub currency_symbol: String,
    /// Placed between the payee and the amount in saved result files.
    /// Empty by default, which reproduces the `<to><amount>` layout.
    pub amount_separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            amount_separator: String::new(),
        }
    }
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(40))
}

/// The recorded transactions, as entered.
pub struct TransactionTable<'a> {
    pub transactions: &'a [Transaction],
    pub config: &'a ReportConfig,
}

impl fmt::Display for TransactionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.transactions.is_empty() {
            return writeln!(f, "No transactions to display!");
        }
        writeln!(f, "=== ORIGINAL TRANSACTIONS ===")?;
        writeln!(f, "{:>15}{:>15}{:>10}", "From", "To", "Amount")?;
        rule(f)?;
        for tx in self.transactions {
            let amount = format!("{}{}", self.config.currency_symbol, tx.amount());
            writeln!(f, "{:>15}{:>15}{:>10}", tx.from(), tx.to(), amount)?;
        }
        writeln!(f, "Total original transactions: {}", self.transactions.len())
    }
}

/// Net balance of every participant with a Creditor/Debtor/Settled status.
pub struct BalanceTable<'a> {
    pub balances: &'a BTreeMap<Identity, i64>,
}

impl fmt::Display for BalanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.balances.is_empty() {
            return writeln!(f, "No net balances to display!");
        }
        writeln!(f, "=== NET BALANCES ===")?;
        writeln!(f, "{:>15}{:>15}{:>10}", "Person", "Net Balance", "Status")?;
        rule(f)?;
        for (identity, net) in self.balances {
            writeln!(f, "{:>15}{:>15}{:>10}", identity, net, Standing::of(*net))?;
        }
        Ok(())
    }
}

/// The minimized payment plan with totals.
pub struct SettlementTable<'a> {
    pub result: &'a SettlementResult,
    pub config: &'a ReportConfig,
}

impl fmt::Display for SettlementTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MINIMIZED TRANSACTIONS ===")?;
        let settlements = self.result.settlements();
        if settlements.is_empty() {
            return writeln!(f, "All debts are already settled! No transactions needed.");
        }
        writeln!(f, "{:>15}{:>15}{:>10}", "From", "To", "Amount")?;
        rule(f)?;
        for s in settlements {
            writeln!(
                f,
                "{} pays {} {}{}",
                s.from, s.to, self.config.currency_symbol, s.amount
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total minimized transactions: {}", settlements.len())?;
        if self.result.original_count() > 0 {
            writeln!(
                f,
                "Reduction achieved: {:.1}%",
                self.result.reduction_percent()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::Ledger;
    use crate::optimization::settlement::SettlementEngine;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.record("Alice", "Bob", 100).unwrap();
        ledger.record("Bob", "Alice", 100).unwrap();
        ledger.record("Carol", "Alice", 25).unwrap();
        ledger
    }

    #[test]
    fn test_transaction_table() {
        let ledger = ledger();
        let config = ReportConfig::default();
        let text = TransactionTable {
            transactions: ledger.transactions(),
            config: &config,
        }
        .to_string();

        assert!(text.starts_with("=== ORIGINAL TRANSACTIONS ===\n"));
        assert!(text.contains(&format!("{:>15}{:>15}{:>10}\n", "alice", "bob", "₹100")));
        assert!(text.ends_with("Total original transactions: 3\n"));
    }

    #[test]
    fn test_empty_tables() {
        let config = ReportConfig::default();
        let empty = BTreeMap::new();
        assert_eq!(
            TransactionTable {
                transactions: &[],
                config: &config
            }
            .to_string(),
            "No transactions to display!\n"
        );
        assert_eq!(
            BalanceTable { balances: &empty }.to_string(),
            "No net balances to display!\n"
        );
    }

    #[test]
    fn test_balance_table_statuses() {
        let result = SettlementEngine::settle(ledger().transactions());
        let text = BalanceTable {
            balances: result.balances(),
        }
        .to_string();

        assert!(text.contains(&format!("{:>15}{:>15}{:>10}", "alice", 25, "Creditor")));
        assert!(text.contains(&format!("{:>15}{:>15}{:>10}", "bob", 0, "Settled")));
        assert!(text.contains(&format!("{:>15}{:>15}{:>10}", "carol", -25, "Debtor")));
    }

    #[test]
    fn test_settlement_table() {
        let result = SettlementEngine::settle(ledger().transactions());
        let config = ReportConfig {
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        let text = SettlementTable {
            result: &result,
            config: &config,
        }
        .to_string();

        assert!(text.contains("carol pays alice $25\n"));
        assert!(text.contains("Total minimized transactions: 1\n"));
        assert!(text.contains("Reduction achieved: 66.7%\n"));
    }

    #[test]
    fn test_settlement_table_nothing_to_pay() {
        let mut ledger = Ledger::new();
        ledger.record("a", "b", 10).unwrap();
        ledger.record("b", "a", 10).unwrap();
        let result = SettlementEngine::settle(ledger.transactions());
        let config = ReportConfig::default();

        let text = SettlementTable {
            result: &result,
            config: &config,
        }
        .to_string();
        assert!(text.ends_with("All debts are already settled! No transactions needed.\n"));
    }
}
