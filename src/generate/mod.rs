//! The generation pipeline's three generator components.
//!
//! Each generator writes through the [`SeedStore`](crate::store::SeedStore)
//! port and never talks to another generator directly; cross-table
//! dependency is mediated by read-back queries. Every generator takes an
//! explicit `StdRng` so tests can inject a deterministic source.

use serde::Serialize;

mod dimensions;
mod factors;
mod logs;
pub mod synth;

pub use dimensions::{generate_emission_sources, generate_organizations};
pub use factors::generate_emission_factors;
pub use logs::generate_emission_logs;

/// What one pipeline step actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub rows_written: u64,
    /// Candidates silently discarded by conflict-key dedup.
    pub rows_skipped: u64,
    /// Individually rejected fact rows; never step-fatal.
    pub row_failures: u64,
}
