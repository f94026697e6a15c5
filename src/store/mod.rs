//! Relational store port.
//!
//! The generators never speak SQL; they hand typed rows to this narrow
//! contract. `PgSeedStore` is the production adapter, `MemorySeedStore`
//! backs tests and `--dry-run`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::schema::TableDescriptor;

mod memory;
mod postgres;

pub use memory::{MemRow, MemorySeedStore};
pub use postgres::PgSeedStore;

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    BigInt(i64),
    Text(String),
    Numeric(Decimal),
    Date(NaiveDate),
    TimestampTz(DateTime<Utc>),
}

/// One row to insert: ordered `(column, value)` pairs. Surrogate ids are
/// assigned by the store and never appear here.
pub type Row = Vec<(&'static str, SqlValue)>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("row for '{table}' is missing non-null column '{column}'")]
    NullViolation {
        table: &'static str,
        column: &'static str,
    },

    #[error("'{table}.{column}' = {id} does not resolve in '{references}'")]
    ForeignKeyViolation {
        table: &'static str,
        column: &'static str,
        id: i64,
        references: &'static str,
    },

    #[error("rows in one batch for '{table}' disagree on column layout")]
    RaggedBatch { table: &'static str },
}

impl StoreError {
    /// Connection-level failures abort a whole step; anything else is
    /// row-scoped and recoverable by the caller.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            StoreError::Database(
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            )
        )
    }
}

/// The only boundary the generation pipeline depends on.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Bulk insert; all-or-nothing. Returns the number of rows written.
    async fn insert_batch(
        &self,
        table: &TableDescriptor,
        rows: Vec<Row>,
    ) -> Result<u64, StoreError>;

    /// Insert one row unless a row with the same `conflict_key` values
    /// already exists. Returns `true` if the row was written.
    async fn insert_or_skip(
        &self,
        table: &TableDescriptor,
        row: Row,
        conflict_key: &[&'static str],
    ) -> Result<bool, StoreError>;

    /// Insert one row; failure is isolated to that row.
    async fn insert_one(&self, table: &TableDescriptor, row: Row) -> Result<(), StoreError>;

    /// Read back every value of one integer column.
    async fn select_ids(
        &self,
        table: &TableDescriptor,
        column: &'static str,
    ) -> Result<Vec<i64>, StoreError>;
}
