// src/core/candidates.rs
use crate::core::types::{Item, Itemset};
use std::collections::BTreeSet;

/// Lazily enumerates every itemset formed by choosing r items from the
/// frequent singleton set, for r = 1 up to n-1 inclusive. The full n-item
/// set is never emitted; that stopping rule is part of the mining contract.
///
/// The pool is kept sorted and combinations come out in lexicographic
/// index order, so the sequence is deterministic for a given input. The
/// count is C(n,1)+C(n,2)+...+C(n,n-1) and thus exponential in n; lazy
/// emission keeps peak memory at one itemset.
pub struct CandidateItemsets {
    pool: Vec<Item>,
    r: usize,
    indices: Vec<usize>,
    fresh: bool,
}

impl CandidateItemsets {
    pub fn new(singletons: &BTreeSet<Item>) -> Self {
        Self {
            pool: singletons.iter().cloned().collect(),
            r: 1,
            indices: Vec::new(),
            fresh: true,
        }
    }

    fn current(&self) -> Itemset {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl Iterator for CandidateItemsets {
    type Item = Itemset;

    fn next(&mut self) -> Option<Itemset> {
        let n = self.pool.len();
        // r runs 1..n, never reaching the full set.
        while self.r < n {
            if self.fresh {
                self.fresh = false;
                self.indices = (0..self.r).collect();
                return Some(self.current());
            }

            // Advance to the next combination: bump the rightmost index
            // that has room, then reset everything to its right.
            let r = self.r;
            let mut i = r;
            while i > 0 {
                i -= 1;
                if self.indices[i] != i + n - r {
                    self.indices[i] += 1;
                    for j in i + 1..r {
                        self.indices[j] = self.indices[j - 1] + 1;
                    }
                    return Some(self.current());
                }
            }

            // Size r exhausted; start over one size up.
            self.r += 1;
            self.fresh = true;
        }
        None
    }
}
