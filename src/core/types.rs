// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// An opaque item label, typically `"<column_name>_<value>"`,
/// e.g. `"Country_Brazil"`. Compared by equality only.
pub type Item = String;

/// One observed row: an unordered set of distinct items.
/// Hash-based so the per-item membership test during support
/// counting is O(1) average.
pub type Transaction = HashSet<Item>;

/// A duplicate-free set of items used both as a candidate and as a
/// frequency-table key. The sorted representation gives the
/// order-independent equality and deterministic iteration the table
/// lookups rely on.
pub type Itemset = BTreeSet<Item>;

/// Maps each frequent itemset to its support in [0, 1].
/// Built once per mining run and never mutated afterward; every key
/// satisfies support >= min_sup. Ordered keys keep rule emission and
/// reporting stable across runs.
pub type SupportTable = BTreeMap<Itemset, f64>;

/// A directional association rule `lhs -> rhs`.
///
/// `lhs` and `rhs` are disjoint and non-empty, `support` is the support
/// of `lhs` ∪ `rhs` as recorded in the support table, and
/// `confidence = support(lhs ∪ rhs) / support(lhs)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub lhs: Itemset,
    pub rhs: Itemset,
    pub support: f64,
    pub confidence: f64,
}
