//! In-memory implementation of the seed store port.
//!
//! Backs the integration tests and `--dry-run`. Behaves like the real
//! store where the pipeline can observe it: monotonic surrogate id
//! assignment, non-null enforcement, foreign-key resolution and
//! conflict-key dedup.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::schema::TableDescriptor;
use crate::store::{Row, SeedStore, SqlValue, StoreError};

/// A persisted row: store-assigned id plus the inserted values.
#[derive(Debug, Clone, PartialEq)]
pub struct MemRow {
    pub id: i64,
    pub values: Row,
}

impl MemRow {
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }
}

#[derive(Default)]
struct MemTable {
    next_id: i64,
    rows: Vec<MemRow>,
}

#[derive(Default)]
pub struct MemorySeedStore {
    tables: Mutex<HashMap<&'static str, MemTable>>,
}

fn value_of<'a>(row: &'a Row, column: &str) -> Option<&'a SqlValue> {
    row.iter()
        .find(|(name, _)| *name == column)
        .map(|(_, value)| value)
}

impl MemorySeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self, table: &TableDescriptor) -> usize {
        let tables = self.tables.lock().expect("memory store mutex poisoned");
        tables.get(table.name).map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn rows(&self, table: &TableDescriptor) -> Vec<MemRow> {
        let tables = self.tables.lock().expect("memory store mutex poisoned");
        tables
            .get(table.name)
            .map(|t| t.rows.clone())
            .unwrap_or_default()
    }

    fn validate(
        tables: &HashMap<&'static str, MemTable>,
        table: &TableDescriptor,
        row: &Row,
    ) -> Result<(), StoreError> {
        for column in table.columns {
            if !column.nullable && !column.primary_key && value_of(row, column.name).is_none() {
                return Err(StoreError::NullViolation {
                    table: table.name,
                    column: column.name,
                });
            }
        }
        for fk in table.foreign_keys {
            if let Some(SqlValue::BigInt(id)) = value_of(row, fk.column) {
                let resolves = tables
                    .get(fk.references_table)
                    .map(|t| t.rows.iter().any(|r| r.id == *id))
                    .unwrap_or(false);
                if !resolves {
                    return Err(StoreError::ForeignKeyViolation {
                        table: table.name,
                        column: fk.column,
                        id: *id,
                        references: fk.references_table,
                    });
                }
            }
        }
        Ok(())
    }

    fn commit(tables: &mut HashMap<&'static str, MemTable>, name: &'static str, values: Row) {
        let entry = tables.entry(name).or_default();
        entry.next_id += 1;
        entry.rows.push(MemRow {
            id: entry.next_id,
            values,
        });
    }
}

#[async_trait]
impl SeedStore for MemorySeedStore {
    async fn insert_batch(
        &self,
        table: &TableDescriptor,
        rows: Vec<Row>,
    ) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().expect("memory store mutex poisoned");
        // All-or-nothing: validate the whole batch before committing any row.
        for row in &rows {
            Self::validate(&tables, table, row)?;
        }
        let written = rows.len() as u64;
        for row in rows {
            Self::commit(&mut tables, table.name, row);
        }
        Ok(written)
    }

    async fn insert_or_skip(
        &self,
        table: &TableDescriptor,
        row: Row,
        conflict_key: &[&'static str],
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock().expect("memory store mutex poisoned");
        Self::validate(&tables, table, &row)?;
        if let Some(existing) = tables.get(table.name) {
            let conflict = existing.rows.iter().any(|r| {
                conflict_key
                    .iter()
                    .all(|k| r.get(k) == value_of(&row, k))
            });
            if conflict {
                return Ok(false);
            }
        }
        Self::commit(&mut tables, table.name, row);
        Ok(true)
    }

    async fn insert_one(&self, table: &TableDescriptor, row: Row) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("memory store mutex poisoned");
        Self::validate(&tables, table, &row)?;
        Self::commit(&mut tables, table.name, row);
        Ok(())
    }

    async fn select_ids(
        &self,
        table: &TableDescriptor,
        column: &'static str,
    ) -> Result<Vec<i64>, StoreError> {
        let tables = self.tables.lock().expect("memory store mutex poisoned");
        let Some(mem_table) = tables.get(table.name) else {
            return Ok(Vec::new());
        };
        if column == "id" {
            return Ok(mem_table.rows.iter().map(|r| r.id).collect());
        }
        Ok(mem_table
            .rows
            .iter()
            .filter_map(|r| match r.get(column) {
                Some(SqlValue::BigInt(v)) => Some(*v),
                _ => None,
            })
            .collect())
    }
}
