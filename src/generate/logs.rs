//! Fact generator: emission logs sampling existing sources and organizations.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{error, info};

use crate::error::{SeedError, SeedResult};
use crate::generate::synth;
use crate::generate::StepReport;
use crate::schema;
use crate::store::{Row, SeedStore, SqlValue};

/// Synthesize `count` emission-log rows, each referencing one existing
/// source and one existing organization (sampled uniformly, with
/// replacement).
///
/// Fails with `MissingReferenceData` before writing anything if either
/// reference table is empty. Rows are inserted individually: a row-level
/// rejection is logged with the row's contents and counted, and the
/// remaining insertions continue; only a connectivity-class failure aborts
/// the step.
pub async fn generate_emission_logs(
    store: &dyn SeedStore,
    rng: &mut StdRng,
    count: u32,
) -> SeedResult<StepReport> {
    let source_ids = store
        .select_ids(&schema::EMISSION_SOURCES, "id")
        .await
        .map_err(|source| SeedError::ReadBack {
            table: schema::EMISSION_SOURCES.name,
            column: "id",
            source,
        })?;
    let organization_ids = store
        .select_ids(&schema::ORGANIZATIONS, "id")
        .await
        .map_err(|source| SeedError::ReadBack {
            table: schema::ORGANIZATIONS.name,
            column: "id",
            source,
        })?;

    if organization_ids.is_empty() {
        return Err(SeedError::MissingReferenceData {
            table: schema::ORGANIZATIONS.name,
        });
    }
    if source_ids.is_empty() {
        return Err(SeedError::MissingReferenceData {
            table: schema::EMISSION_SOURCES.name,
        });
    }

    let today = Utc::now().date_naive();
    let mut report = StepReport::default();

    for _ in 0..count {
        let quantity = rng.gen_range(1..=1000i64);
        // Placeholder figure, not a physically derived computation: an
        // independent draw in [1, 1000] halved.
        let total_emissions = Decimal::new(rng.gen_range(1..=1000i64) * 5, 1);
        let row: Row = vec![
            ("source_id", SqlValue::BigInt(*synth::pick(rng, &source_ids))),
            (
                "organization_id",
                SqlValue::BigInt(*synth::pick(rng, &organization_ids)),
            ),
            ("date", SqlValue::Date(synth::date_this_decade(rng, today))),
            ("quantity", SqlValue::Numeric(Decimal::from(quantity))),
            ("total_emissions", SqlValue::Numeric(total_emissions)),
        ];

        match store.insert_one(&schema::EMISSIONS_LOGS, row.clone()).await {
            Ok(()) => report.rows_written += 1,
            Err(source) if source.is_connectivity() => {
                return Err(SeedError::Insert {
                    table: schema::EMISSIONS_LOGS.name,
                    source,
                });
            }
            Err(err) => {
                error!(table = schema::EMISSIONS_LOGS.name, row = ?row, error = %err,
                    "emission log rejected, continuing");
                report.row_failures += 1;
            }
        }
    }

    info!(
        rows_written = report.rows_written,
        row_failures = report.row_failures,
        "emission logs inserted"
    );
    Ok(report)
}
