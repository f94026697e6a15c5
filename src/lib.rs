//! Seed-data pipeline for the greenhouse-gas emissions schema.
//!
//! Synthesizes referentially-consistent test data for four tables
//! (organizations, emission sources, emission factors, emission logs) and
//! loads it into PostgreSQL through a narrow store port. Generation order is
//! fixed by the foreign-key edges: dimensions first, then the derived
//! dimension, then the fact table, with all cross-table dependency mediated
//! by read-back queries against the store.

pub mod config;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod schema;
pub mod store;
pub mod vocab;

pub use error::SeedError;
pub use pipeline::{PipelineConfig, PipelineReport, Step, StepOutcome};
pub use store::{MemorySeedStore, PgSeedStore, SeedStore};
