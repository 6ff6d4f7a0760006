// src/lib.rs

pub mod core;
pub mod error;
pub mod ingest;
pub mod persistence;
pub mod report;

pub use crate::core::engine::{AprioriEngine, MiningOutcome};
pub use crate::error::MinerError;
