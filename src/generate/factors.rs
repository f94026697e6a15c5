//! Derived-dimension generator: one emission factor per existing source.

use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{SeedError, SeedResult};
use crate::generate::synth::pick;
use crate::generate::StepReport;
use crate::schema;
use crate::store::{Row, SeedStore, SqlValue};
use crate::vocab::{CalculationMethod, FactorUnit};

/// Synthesize one factor record for every emission source currently in the
/// store.
///
/// Fails with `MissingReferenceData` when the source table is empty.
/// Factor values are uniform on the 3-decimal grid in [0.100, 10.000];
/// insert-or-skip keyed on `source_id` makes "one factor per source" an
/// enforced invariant rather than a convention, so re-running is idempotent.
pub async fn generate_emission_factors(
    store: &dyn SeedStore,
    rng: &mut StdRng,
) -> SeedResult<StepReport> {
    let source_ids = store
        .select_ids(&schema::EMISSION_SOURCES, "id")
        .await
        .map_err(|source| SeedError::ReadBack {
            table: schema::EMISSION_SOURCES.name,
            column: "id",
            source,
        })?;

    if source_ids.is_empty() {
        return Err(SeedError::MissingReferenceData {
            table: schema::EMISSION_SOURCES.name,
        });
    }

    let mut report = StepReport::default();
    for source_id in source_ids {
        // Sampling integer thousandths keeps the value exactly on the
        // 3-decimal grid without a float round-trip.
        let factor_value = Decimal::new(rng.gen_range(100..=10_000), 3);
        let row: Row = vec![
            ("source_id", SqlValue::BigInt(source_id)),
            ("factor_value", SqlValue::Numeric(factor_value)),
            (
                "unit",
                SqlValue::Text(pick(rng, FactorUnit::ALL).as_str().to_string()),
            ),
            (
                "calculation_method",
                SqlValue::Text(pick(rng, CalculationMethod::ALL).as_str().to_string()),
            ),
        ];
        let inserted = store
            .insert_or_skip(&schema::EMISSION_FACTORS, row, schema::FACTOR_CONFLICT_KEY)
            .await
            .map_err(|source| SeedError::Insert {
                table: schema::EMISSION_FACTORS.name,
                source,
            })?;
        if inserted {
            report.rows_written += 1;
        } else {
            report.rows_skipped += 1;
        }
    }

    info!(
        rows_written = report.rows_written,
        rows_skipped = report.rows_skipped,
        "emission factors inserted"
    );
    Ok(report)
}
