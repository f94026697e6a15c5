//! Dimension generators: organizations and the scope × source cross product.

use chrono::Utc;
use rand::rngs::StdRng;
use tracing::info;

use crate::error::{SeedError, SeedResult};
use crate::generate::synth;
use crate::generate::StepReport;
use crate::schema;
use crate::store::{Row, SeedStore, SqlValue};
use crate::vocab::{Scope, SourceName};

/// Create `count` organizations in a single batch.
///
/// Not idempotent: re-invocation appends new rows. `count == 0` is a valid
/// no-op and performs no write at all.
pub async fn generate_organizations(
    store: &dyn SeedStore,
    rng: &mut StdRng,
    count: u32,
) -> SeedResult<StepReport> {
    if count == 0 {
        return Ok(StepReport::default());
    }

    let created_at = Utc::now();
    let rows: Vec<Row> = (0..count)
        .map(|_| {
            vec![
                ("name", SqlValue::Text(synth::company_name(rng))),
                ("description", SqlValue::Text(synth::catch_phrase(rng))),
                ("created_at", SqlValue::TimestampTz(created_at)),
            ]
        })
        .collect();

    let rows_written = store
        .insert_batch(&schema::ORGANIZATIONS, rows)
        .await
        .map_err(|source| SeedError::BatchInsert {
            table: schema::ORGANIZATIONS.name,
            source,
        })?;

    info!(rows_written, "organizations inserted");
    Ok(StepReport {
        rows_written,
        ..StepReport::default()
    })
}

/// Populate the emission-source dimension with the full cross product of
/// scopes and source names.
///
/// Each candidate goes through insert-or-skip keyed on
/// `(scope, source_name)`, so the table never holds a duplicate pair and
/// re-running the operation is idempotent: cardinality is capped at
/// |scopes| × |source names|.
pub async fn generate_emission_sources(
    store: &dyn SeedStore,
    rng: &mut StdRng,
) -> SeedResult<StepReport> {
    let mut report = StepReport::default();

    for scope in Scope::ALL {
        for source_name in SourceName::ALL {
            let row: Row = vec![
                ("scope", SqlValue::Text(scope.as_str().to_string())),
                ("source_name", SqlValue::Text(source_name.as_str().to_string())),
                ("description", SqlValue::Text(synth::catch_phrase(rng))),
            ];
            let inserted = store
                .insert_or_skip(&schema::EMISSION_SOURCES, row, schema::SOURCE_CONFLICT_KEY)
                .await
                .map_err(|source| SeedError::Insert {
                    table: schema::EMISSION_SOURCES.name,
                    source,
                })?;
            if inserted {
                report.rows_written += 1;
            } else {
                report.rows_skipped += 1;
            }
        }
    }

    info!(
        rows_written = report.rows_written,
        rows_skipped = report.rows_skipped,
        "emission sources inserted"
    );
    Ok(report)
}
