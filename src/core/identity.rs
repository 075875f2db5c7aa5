use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical name of a participant in an expense group.
///
/// Raw names are trimmed of surrounding spaces and tabs and lower-cased,
/// so `"Alice"`, `"alice "` and `"\tALICE"` all refer to the same person.
/// Identities order lexicographically, which fixes the order in which
/// balances are scanned during settlement.
///
/// # Examples
///
/// ```
/// use debt_simplifier::core::identity::Identity;
///
/// let a = Identity::normalize("  Alice\t");
/// let b = Identity::normalize("ALICE");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Normalize a raw participant name.
    ///
    /// Never fails. An empty result is a valid identity here; the
    /// [`Ledger`](crate::core::ledger::Ledger) is responsible for rejecting it.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Trim surrounding spaces and tabs, then lower-case.
///
/// Only ' ' and '\t' count as padding; other whitespace is kept.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| c == ' ' || c == '\t').to_lowercase()
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}
