pub mod identity;
pub mod ledger;
pub mod transaction;
