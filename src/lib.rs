//! # debt-simplifier
//!
//! Group expense settlement.
//!
//! Given a list of debts ("X owes Y amount Z"), this crate computes each
//! participant's net balance and a short replacement plan of payments that
//! settles everyone.
//!
//! ## Architecture
//!
//! - **core** — Identities, transactions and the validating ledger
//! - **optimization** — Balance aggregation and the greedy settlement engine
//! - **group** — The expense group that ties a ledger to its settlement
//! - **report** — Console tables
//! - **storage** — Line-oriented text files
//! - **simulation** — Random expense groups for benchmarking

pub mod core;
pub mod group;
pub mod optimization;
pub mod report;
pub mod simulation;
pub mod storage;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::identity::Identity;
    pub use crate::core::ledger::{Ledger, ValidationError};
    pub use crate::core::transaction::{Settlement, Transaction};
    pub use crate::group::ExpenseGroup;
    pub use crate::optimization::balances::{Balance, Standing};
    pub use crate::optimization::settlement::{SettlementEngine, SettlementResult};
    pub use crate::storage::{LoadReport, StorageError};
}
