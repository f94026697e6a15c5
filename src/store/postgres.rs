//! Postgres implementation of the seed store port.
//!
//! A newtype wrapping `PgPool`. All SQL is runtime-checked (`sqlx::query`,
//! not `sqlx::query!`) and built from the schema catalog descriptors, so
//! no table shape is re-declared at a call site. Dedup inserts use
//! `ON CONFLICT .. DO NOTHING` against the declared unique key.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use tracing::{info, warn};

use crate::error::SeedError;
use crate::schema::{self, ColumnType, TableDescriptor};
use crate::store::{Row, SeedStore, SqlValue, StoreError};

pub struct PgSeedStore {
    pool: PgPool,
}

impl PgSeedStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Connect with a bounded retry budget (fixed attempt count, fixed
    /// delay). Exhausting the budget is fatal: seeding against a store
    /// that never came up has nothing useful to do.
    pub async fn connect(url: &str, attempts: u32, delay: Duration) -> Result<Self, SeedError> {
        let mut last_err = None;
        for attempt in 1..=attempts {
            match PgPoolOptions::new().max_connections(5).connect(url).await {
                Ok(pool) => {
                    info!(attempt, "database is ready");
                    return Ok(Self::new(pool));
                }
                Err(err) => {
                    warn!(attempt, error = %err, "waiting for the database to be ready");
                    last_err = Some(err);
                    if attempt < attempts {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
        Err(SeedError::Connectivity {
            attempts,
            source: last_err.unwrap_or(sqlx::Error::PoolClosed),
        })
    }

    /// Create the four seeded tables (and their constraints) if absent,
    /// in foreign-key dependency order.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for table in schema::ALL_TABLES {
            sqlx::query(&create_table_sql(table))
                .execute(&self.pool)
                .await?;
            info!(table = table.name, "schema ensured");
        }
        Ok(())
    }
}

fn sql_type(ty: ColumnType) -> String {
    match ty {
        ColumnType::BigSerial => "BIGSERIAL".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::VarChar(n) => format!("VARCHAR({n})"),
        ColumnType::Numeric => "NUMERIC".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::TimestampTz => "TIMESTAMPTZ".to_string(),
    }
}

fn create_table_sql(table: &TableDescriptor) -> String {
    let mut parts: Vec<String> = Vec::new();
    for column in table.columns {
        let mut part = format!("{} {}", column.name, sql_type(column.ty));
        if column.primary_key {
            part.push_str(" PRIMARY KEY");
        } else if !column.nullable {
            part.push_str(" NOT NULL");
        }
        parts.push(part);
    }
    if let Some(key) = table.unique_key {
        parts.push(format!("UNIQUE ({})", key.join(", ")));
    }
    for fk in table.foreign_keys {
        parts.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            fk.column, fk.references_table, fk.references_column
        ));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table.name,
        parts.join(", ")
    )
}

/// `INSERT INTO t (c1, c2) VALUES ($1, $2), ($3, $4), ...`
fn insert_sql(table: &TableDescriptor, columns: &[&str], row_count: usize) -> String {
    let mut groups = Vec::with_capacity(row_count);
    let mut n = 1;
    for _ in 0..row_count {
        let group: Vec<String> = columns
            .iter()
            .map(|_| {
                let p = format!("${n}");
                n += 1;
                p
            })
            .collect();
        groups.push(format!("({})", group.join(", ")));
    }
    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table.name,
        columns.join(", "),
        groups.join(", ")
    )
}

fn bind_row<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    row: Row,
) -> Query<'q, Postgres, PgArguments> {
    for (_, value) in row {
        query = match value {
            SqlValue::BigInt(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Numeric(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
            SqlValue::TimestampTz(v) => query.bind(v),
        };
    }
    query
}

fn row_columns(row: &Row) -> Vec<&'static str> {
    row.iter().map(|(name, _)| *name).collect()
}

#[async_trait]
impl SeedStore for PgSeedStore {
    async fn insert_batch(
        &self,
        table: &TableDescriptor,
        rows: Vec<Row>,
    ) -> Result<u64, StoreError> {
        let Some(first) = rows.first() else {
            return Ok(0);
        };
        let columns = row_columns(first);
        if rows.iter().any(|r| row_columns(r) != columns) {
            return Err(StoreError::RaggedBatch { table: table.name });
        }

        let sql = insert_sql(table, &columns, rows.len());
        let mut query = sqlx::query(&sql);
        for row in rows {
            query = bind_row(query, row);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn insert_or_skip(
        &self,
        table: &TableDescriptor,
        row: Row,
        conflict_key: &[&'static str],
    ) -> Result<bool, StoreError> {
        let columns = row_columns(&row);
        let sql = format!(
            "{} ON CONFLICT ({}) DO NOTHING",
            insert_sql(table, &columns, 1),
            conflict_key.join(", ")
        );
        let result = bind_row(sqlx::query(&sql), row).execute(&self.pool).await?;
        Ok(result.rows_affected() == 1)
    }

    async fn insert_one(&self, table: &TableDescriptor, row: Row) -> Result<(), StoreError> {
        let columns = row_columns(&row);
        let sql = insert_sql(table, &columns, 1);
        bind_row(sqlx::query(&sql), row).execute(&self.pool).await?;
        Ok(())
    }

    async fn select_ids(
        &self,
        table: &TableDescriptor,
        column: &'static str,
    ) -> Result<Vec<i64>, StoreError> {
        let sql = format!("SELECT {} FROM {}", column, table.name);
        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }
}
