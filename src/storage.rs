//! Line-oriented text files.
//!
//! Input files hold one `<from> <to> <amount>` triple per line. Lines that
//! are not exactly three whitespace-separated tokens with an integer amount
//! are skipped without error. Result files hold a fixed header followed by
//! one `<from> pays <to><amount>` line per payment.

use crate::core::transaction::{Settlement, Transaction};
use crate::group::ExpenseGroup;
use crate::report::ReportConfig;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or writing group files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to the lines of a loaded file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines recorded in the ledger.
    pub loaded: usize,
    /// Well-formed lines the ledger refused.
    pub rejected: usize,
    /// Non-blank lines that did not parse.
    pub skipped: usize,
}

/// Split a line into `(from, to, amount)`.
///
/// Returns `None` unless the line is exactly three tokens and the third
/// parses as an integer. Amount sign is not checked here.
pub fn parse_line(line: &str) -> Option<(&str, &str, i64)> {
    let mut tokens = line.split_whitespace();
    let from = tokens.next()?;
    let to = tokens.next()?;
    let amount = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((from, to, amount))
}

/// Replace the group's transactions with the contents of `path`.
///
/// The file is read completely before the group is cleared, so an open or
/// read failure leaves the group as it was.
pub fn load(path: impl AsRef<Path>, group: &mut ExpenseGroup) -> Result<LoadReport, StorageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    group.clear();
    let mut report = LoadReport::default();
    for (number, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((from, to, amount)) => match group.record_transaction(from, to, amount) {
                Ok(()) => report.loaded += 1,
                Err(_) => report.rejected += 1,
            },
            None => {
                warn!("{}:{}: skipping malformed line", path.display(), number + 1);
                report.skipped += 1;
            }
        }
    }

    info!(
        "loaded {} transactions from {} ({} rejected, {} skipped)",
        report.loaded,
        path.display(),
        report.rejected,
        report.skipped
    );
    Ok(report)
}

/// Write a settlement plan in the result-file layout.
pub fn write_results<W: Write>(
    mut out: W,
    settlements: &[Settlement],
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out, "=== MINIMIZED DEBT TRANSACTIONS ===")?;
    writeln!(out, "Generated by Debt Minimizer Tool")?;
    writeln!(out, "{}", "=".repeat(40))?;

    if settlements.is_empty() {
        writeln!(out, "All debts are settled! No transactions needed.")?;
    } else {
        for s in settlements {
            writeln!(
                out,
                "{} pays {}{}{}",
                s.from, s.to, config.amount_separator, s.amount
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Total transactions: {}", settlements.len())?;
    }
    Ok(())
}

/// Save a settlement plan to `path`, replacing any existing file.
pub fn save(
    path: impl AsRef<Path>,
    settlements: &[Settlement],
    config: &ReportConfig,
) -> Result<(), StorageError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write_results(&mut out, settlements, config)
        .and_then(|()| out.flush())
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    info!("saved {} payments to {}", settlements.len(), path.display());
    Ok(())
}

/// Write transactions in the input-file layout.
pub fn write_transactions<W: Write>(mut out: W, transactions: &[Transaction]) -> io::Result<()> {
    for tx in transactions {
        writeln!(out, "{} {} {}", tx.from(), tx.to(), tx.amount())?;
    }
    Ok(())
}

/// Save transactions to `path` so that [`load`] can read them back.
pub fn save_transactions(
    path: impl AsRef<Path>,
    transactions: &[Transaction],
) -> Result<(), StorageError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write_transactions(&mut out, transactions)
        .and_then(|()| out.flush())
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
}
