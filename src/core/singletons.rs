// src/core/singletons.rs
use crate::core::types::{Item, Transaction};
use crate::error::MinerError;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Finds the one-item itemsets: counts how many transactions each distinct
/// item appears in and keeps those whose support meets `min_sup`.
///
/// Returns a sorted set so downstream candidate enumeration is
/// deterministic; the mathematical result does not depend on the order.
pub fn frequent_singletons(
    transactions: &[Transaction],
    min_sup: f64,
) -> Result<BTreeSet<Item>, MinerError> {
    if transactions.is_empty() {
        return Err(MinerError::EmptyTransactions);
    }
    let total = transactions.len() as f64;

    let mut counts: HashMap<&Item, usize> = HashMap::new();
    for tran in transactions {
        for item in tran {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    let frequent: BTreeSet<Item> = counts
        .into_iter()
        .filter(|&(_, count)| count as f64 / total >= min_sup)
        .map(|(item, _)| item.clone())
        .collect();

    debug!(frequent = frequent.len(), "singleton filter done");
    Ok(frequent)
}
