// src/core/mod.rs

pub mod candidates;
pub mod engine;
pub mod rules;
pub mod singletons;
pub mod support;
pub mod types;
