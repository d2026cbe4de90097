// src/services/mod.rs

pub mod fred;
pub mod quotes;
pub mod snapshot;
pub mod valuation;
