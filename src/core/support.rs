// src/core/support.rs
use crate::core::types::{Item, Itemset, SupportTable, Transaction};
use crate::error::MinerError;
use std::collections::BTreeSet;
use tracing::debug;

/// Builds the support table: for each candidate itemset, counts the
/// transactions that contain it as a subset and keeps the candidate iff
/// count / total >= min_sup. Failing candidates are simply absent.
///
/// Cost is O(|candidates| * |transactions| * |itemset|) with an O(1)
/// hash membership test per item. Candidates are checked against the
/// singleton set they were generated from; a stray item means the
/// generator is broken and the run aborts.
pub fn evaluate_support<I>(
    transactions: &[Transaction],
    candidates: I,
    min_sup: f64,
    singletons: &BTreeSet<Item>,
) -> Result<SupportTable, MinerError>
where
    I: IntoIterator<Item = Itemset>,
{
    if transactions.is_empty() {
        return Err(MinerError::EmptyTransactions);
    }
    let total = transactions.len() as f64;

    let mut table = SupportTable::new();
    let mut seen = 0usize;
    for candidate in candidates {
        if !candidate.iter().all(|item| singletons.contains(item)) {
            return Err(MinerError::InconsistentItemset(candidate));
        }
        seen += 1;

        let count = transactions
            .iter()
            .filter(|tran| candidate.iter().all(|item| tran.contains(item)))
            .count();
        let support = count as f64 / total;
        if support >= min_sup {
            table.insert(candidate, support);
        }
    }

    debug!(candidates = seen, frequent = table.len(), "support evaluation done");
    Ok(table)
}
