// src/core/engine.rs
use crate::core::candidates::CandidateItemsets;
use crate::core::rules::generate_rules;
use crate::core::singletons::frequent_singletons;
use crate::core::support::evaluate_support;
use crate::core::types::{Rule, SupportTable, Transaction};
use crate::error::MinerError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The immutable result of one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningOutcome {
    pub supports: SupportTable,
    pub rules: Vec<Rule>,
}

/// The full Apriori pipeline over a fixed in-memory transaction store.
///
/// Thresholds and transactions are validated at construction, so a run
/// either refuses the input up front or completes; nothing is retried and
/// no partial result escapes. Candidates are enumerated brute-force from
/// the frequent singletons rather than level-wise from frequent
/// (k-1)-itemsets; that naive generation is the contract here, not an
/// oversight.
#[derive(Debug)]
pub struct AprioriEngine {
    transactions: Vec<Transaction>,
    min_sup: f64,
    min_conf: f64,
}

impl AprioriEngine {
    pub fn new(
        transactions: Vec<Transaction>,
        min_sup: f64,
        min_conf: f64,
    ) -> Result<Self, MinerError> {
        if !(min_sup > 0.0 && min_sup <= 1.0) {
            return Err(MinerError::SupportOutOfRange(min_sup));
        }
        if !(min_conf > 0.0 && min_conf < 1.0) {
            return Err(MinerError::ConfidenceOutOfRange(min_conf));
        }
        if transactions.is_empty() {
            return Err(MinerError::EmptyTransactions);
        }
        Ok(Self {
            transactions,
            min_sup,
            min_conf,
        })
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Runs the sequential pipeline: singleton filter, candidate
    /// enumeration, support evaluation, rule generation.
    pub fn mine(&self) -> Result<MiningOutcome, MinerError> {
        info!(
            transactions = self.transactions.len(),
            min_sup = self.min_sup,
            min_conf = self.min_conf,
            "mining run started"
        );

        let singletons = frequent_singletons(&self.transactions, self.min_sup)?;
        let candidates = CandidateItemsets::new(&singletons);
        let supports =
            evaluate_support(&self.transactions, candidates, self.min_sup, &singletons)?;

        // With no frequent itemsets there is no longest-itemset to split,
        // and the run simply produces no rules.
        let rules = if supports.is_empty() {
            Vec::new()
        } else {
            generate_rules(&supports, self.min_conf)?
        };

        info!(
            frequent_itemsets = supports.len(),
            rules = rules.len(),
            "mining run finished"
        );
        Ok(MiningOutcome { supports, rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Itemset;

    fn tran(items: &[&str]) -> Transaction {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> Itemset {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let data = vec![tran(&["a"])];
        assert!(matches!(
            AprioriEngine::new(data.clone(), 0.0, 0.5).unwrap_err(),
            MinerError::SupportOutOfRange(_)
        ));
        assert!(matches!(
            AprioriEngine::new(data.clone(), 1.5, 0.5).unwrap_err(),
            MinerError::SupportOutOfRange(_)
        ));
        assert!(matches!(
            AprioriEngine::new(data.clone(), 0.5, 1.0).unwrap_err(),
            MinerError::ConfidenceOutOfRange(_)
        ));
        assert!(matches!(
            AprioriEngine::new(data, 0.5, 0.0).unwrap_err(),
            MinerError::ConfidenceOutOfRange(_)
        ));
    }

    #[test]
    fn rejects_empty_store() {
        assert!(matches!(
            AprioriEngine::new(Vec::new(), 0.5, 0.5).unwrap_err(),
            MinerError::EmptyTransactions
        ));
    }

    #[test]
    fn two_runs_agree() {
        let data = vec![
            tran(&["a", "b", "c"]),
            tran(&["a", "b", "d"]),
            tran(&["a", "c", "d"]),
        ];
        let engine = AprioriEngine::new(data, 0.5, 0.6).unwrap();
        let first = engine.mine().unwrap();
        let second = engine.mine().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scarce_data_yields_empty_outcome_without_error() {
        // nothing reaches min_sup = 1.0, so no itemsets and no rules
        let data = vec![tran(&["a"]), tran(&["b"])];
        let engine = AprioriEngine::new(data, 1.0, 0.5).unwrap();
        let outcome = engine.mine().unwrap();
        assert!(outcome.supports.is_empty());
        assert!(outcome.rules.is_empty());
    }

    #[test]
    fn single_transaction_supports_are_total() {
        let data = vec![tran(&["a", "b", "c"])];
        let engine = AprioriEngine::new(data, 1.0, 0.5).unwrap();
        let outcome = engine.mine().unwrap();
        // every proper sub-itemset of the transaction is present at 1.0
        assert!(outcome.supports.contains_key(&set(&["a", "b"])));
        assert!(outcome.supports.values().all(|&s| s == 1.0));
        // the full 3-item set is never generated as a candidate
        assert!(!outcome.supports.contains_key(&set(&["a", "b", "c"])));
    }
}
