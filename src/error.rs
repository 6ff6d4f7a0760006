// src/error.rs
use crate::core::types::Itemset;
use thiserror::Error;

/// Everything that can go wrong during a mining run.
///
/// All failures are deterministic functions of the input, so nothing here
/// is worth retrying; callers get the error before any partial result is
/// built.
#[derive(Debug, Error)]
pub enum MinerError {
    #[error("transaction store is empty; support is undefined over zero transactions")]
    EmptyTransactions,

    #[error("minimum support must lie in (0, 1], got {0}")]
    SupportOutOfRange(f64),

    #[error("minimum confidence must lie in (0, 1), got {0}")]
    ConfidenceOutOfRange(f64),

    #[error("support table is empty; there is no longest itemset to derive rules from")]
    EmptySupportTable,

    /// A candidate referenced items outside the frequent singleton set.
    /// Indicates a candidate-generation bug; we fail loudly rather than
    /// silently miscount.
    #[error("candidate itemset {0:?} contains items outside the frequent singleton set")]
    InconsistentItemset(Itemset),

    #[error("dataset row {row} has {found} fields, header declares {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("dataset has a header but no data rows")]
    NoDataRows,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("snapshot codec error: {0}")]
    Encode(#[from] bincode::Error),
}
