// src/core/rules.rs
use crate::core::types::{Itemset, Rule, SupportTable};
use crate::error::MinerError;
use tracing::debug;

/// Derives association rules from a support table.
///
/// Only frequent itemsets strictly shorter than the longest one in the
/// table participate as rule fragments; the max-length itemsets are
/// reachable solely as the union of a (lhs, rhs) pair. Every ordered pair
/// of disjoint fragments whose union is itself frequent yields a rule
/// when support(union) / support(lhs) strictly exceeds `min_conf`, so
/// `a -> b` and `b -> a` can both appear. Emission follows the table's
/// key order and is stable for a given input.
pub fn generate_rules(table: &SupportTable, min_conf: f64) -> Result<Vec<Rule>, MinerError> {
    let max_len = table
        .keys()
        .map(|itemset| itemset.len())
        .max()
        .ok_or(MinerError::EmptySupportTable)?;

    let pool: Vec<(&Itemset, f64)> = table
        .iter()
        .filter(|(itemset, _)| itemset.len() < max_len)
        .map(|(itemset, &support)| (itemset, support))
        .collect();

    let mut rules = Vec::new();
    for &(lhs, lhs_support) in &pool {
        for &(rhs, _) in &pool {
            if !lhs.is_disjoint(rhs) {
                continue;
            }
            let superset: Itemset = lhs.union(rhs).cloned().collect();
            if superset.len() > max_len {
                continue;
            }
            let Some(&superset_support) = table.get(&superset) else {
                continue;
            };
            // lhs is drawn from the table, so this always holds; kept as
            // an explicit guard alongside the superset lookup.
            if !table.contains_key(lhs) {
                continue;
            }
            let confidence = superset_support / lhs_support;
            if confidence > min_conf {
                rules.push(Rule {
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                    support: superset_support,
                    confidence,
                });
            }
        }
    }

    debug!(rules = rules.len(), "rule generation done");
    Ok(rules)
}
