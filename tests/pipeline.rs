//! End-to-end pipeline properties, run against the in-memory store with a
//! seeded random source so every assertion is deterministic.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

use emission_seeder::error::SeedError;
use emission_seeder::generate::{
    generate_emission_factors, generate_emission_logs, generate_emission_sources,
    generate_organizations,
};
use emission_seeder::pipeline::{self, PipelineConfig, Step};
use emission_seeder::schema;
use emission_seeder::store::{MemorySeedStore, SeedStore, SqlValue};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn text_of(value: Option<&SqlValue>) -> &str {
    match value {
        Some(SqlValue::Text(s)) => s,
        other => panic!("expected text value, got {other:?}"),
    }
}

fn bigint_of(value: Option<&SqlValue>) -> i64 {
    match value {
        Some(SqlValue::BigInt(v)) => *v,
        other => panic!("expected bigint value, got {other:?}"),
    }
}

fn numeric_of(value: Option<&SqlValue>) -> Decimal {
    match value {
        Some(SqlValue::Numeric(d)) => *d,
        other => panic!("expected numeric value, got {other:?}"),
    }
}

#[tokio::test]
async fn test_organizations_zero_count_writes_nothing() {
    let store = MemorySeedStore::new();
    let report = generate_organizations(&store, &mut rng(), 0).await.unwrap();
    assert_eq!(report.rows_written, 0);
    assert_eq!(store.row_count(&schema::ORGANIZATIONS), 0);
}

#[tokio::test]
async fn test_organizations_appends_on_rerun() {
    let store = MemorySeedStore::new();
    let mut rng = rng();
    generate_organizations(&store, &mut rng, 20).await.unwrap();
    generate_organizations(&store, &mut rng, 20).await.unwrap();
    // Not idempotent: re-invocation appends rather than replaces.
    assert_eq!(store.row_count(&schema::ORGANIZATIONS), 40);
    for row in store.rows(&schema::ORGANIZATIONS) {
        assert!(!text_of(row.get("name")).is_empty());
        assert!(matches!(
            row.get("created_at"),
            Some(SqlValue::TimestampTz(_))
        ));
    }
}

#[tokio::test]
async fn test_emission_sources_is_full_cross_product() {
    let store = MemorySeedStore::new();
    let report = generate_emission_sources(&store, &mut rng()).await.unwrap();
    assert_eq!(report.rows_written, 93);
    assert_eq!(report.rows_skipped, 0);

    let rows = store.rows(&schema::EMISSION_SOURCES);
    let pairs: HashSet<(String, String)> = rows
        .iter()
        .map(|r| {
            (
                text_of(r.get("scope")).to_string(),
                text_of(r.get("source_name")).to_string(),
            )
        })
        .collect();
    // No two rows share a (scope, source_name) pair.
    assert_eq!(pairs.len(), rows.len());
    assert_eq!(pairs.len(), 93);
}

#[tokio::test]
async fn test_emission_sources_twice_equals_once() {
    let store = MemorySeedStore::new();
    let mut rng = rng();
    generate_emission_sources(&store, &mut rng).await.unwrap();
    let second = generate_emission_sources(&store, &mut rng).await.unwrap();
    assert_eq!(second.rows_written, 0);
    assert_eq!(second.rows_skipped, 93);
    assert_eq!(store.row_count(&schema::EMISSION_SOURCES), 93);
}

#[tokio::test]
async fn test_factors_cover_every_source_exactly_once() {
    let store = MemorySeedStore::new();
    let mut rng = rng();
    generate_emission_sources(&store, &mut rng).await.unwrap();

    let report = generate_emission_factors(&store, &mut rng).await.unwrap();
    assert_eq!(report.rows_written, 93);

    let source_ids: HashSet<i64> = store
        .select_ids(&schema::EMISSION_SOURCES, "id")
        .await
        .unwrap()
        .into_iter()
        .collect();
    let low = Decimal::new(100, 3);
    let high = Decimal::new(10_000, 3);
    for row in store.rows(&schema::EMISSION_FACTORS) {
        assert!(source_ids.contains(&bigint_of(row.get("source_id"))));
        let value = numeric_of(row.get("factor_value"));
        assert!(value >= low && value <= high, "factor out of range: {value}");
    }
}

#[tokio::test]
async fn test_factors_rerun_is_suppressed_per_source() {
    let store = MemorySeedStore::new();
    let mut rng = rng();
    generate_emission_sources(&store, &mut rng).await.unwrap();
    generate_emission_factors(&store, &mut rng).await.unwrap();

    let second = generate_emission_factors(&store, &mut rng).await.unwrap();
    assert_eq!(second.rows_written, 0);
    assert_eq!(second.rows_skipped, 93);
    assert_eq!(store.row_count(&schema::EMISSION_FACTORS), 93);
}

#[tokio::test]
async fn test_factors_fail_without_sources() {
    let store = MemorySeedStore::new();
    let result = generate_emission_factors(&store, &mut rng()).await;
    assert!(matches!(
        result,
        Err(SeedError::MissingReferenceData {
            table: "emission_sources"
        })
    ));
    assert_eq!(store.row_count(&schema::EMISSION_FACTORS), 0);
}

#[tokio::test]
async fn test_logs_reference_only_existing_rows() {
    let store = MemorySeedStore::new();
    let mut rng = rng();
    generate_organizations(&store, &mut rng, 5).await.unwrap();
    generate_emission_sources(&store, &mut rng).await.unwrap();

    let report = generate_emission_logs(&store, &mut rng, 1000).await.unwrap();
    assert_eq!(report.rows_written, 1000);
    assert_eq!(report.row_failures, 0);
    assert_eq!(store.row_count(&schema::EMISSIONS_LOGS), 1000);

    let org_ids: HashSet<i64> = store
        .select_ids(&schema::ORGANIZATIONS, "id")
        .await
        .unwrap()
        .into_iter()
        .collect();
    let source_ids: HashSet<i64> = store
        .select_ids(&schema::EMISSION_SOURCES, "id")
        .await
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(org_ids.len(), 5);
    assert_eq!(source_ids.len(), 93);

    for row in store.rows(&schema::EMISSIONS_LOGS) {
        assert!(source_ids.contains(&bigint_of(row.get("source_id"))));
        assert!(org_ids.contains(&bigint_of(row.get("organization_id"))));
        assert!(numeric_of(row.get("quantity")) >= Decimal::ZERO);
        assert!(numeric_of(row.get("total_emissions")) >= Decimal::ZERO);
        assert!(matches!(row.get("date"), Some(SqlValue::Date(_))));
    }
}

#[tokio::test]
async fn test_logs_fail_against_empty_reference_tables() {
    let store = MemorySeedStore::new();
    let result = generate_emission_logs(&store, &mut rng(), 1000).await;
    assert!(matches!(result, Err(SeedError::MissingReferenceData { .. })));
    assert_eq!(store.row_count(&schema::EMISSIONS_LOGS), 0);
}

#[tokio::test]
async fn test_full_pipeline_run() {
    let store = MemorySeedStore::new();
    let config = PipelineConfig::default();
    let report = pipeline::run(&store, &mut rng(), &config).await;

    assert!(report.all_succeeded());
    assert_eq!(store.row_count(&schema::ORGANIZATIONS), 20);
    assert_eq!(store.row_count(&schema::EMISSION_SOURCES), 93);
    assert_eq!(store.row_count(&schema::EMISSION_FACTORS), 93);
    assert_eq!(store.row_count(&schema::EMISSIONS_LOGS), 1000);
    assert_eq!(report.total_rows_written(), 20 + 93 + 93 + 1000);
}

#[tokio::test]
async fn test_pipeline_cascade_failure_is_recorded_per_step() {
    let store = MemorySeedStore::new();
    // Zero organizations: the log step has nothing to reference.
    let config = PipelineConfig {
        organization_count: 0,
        log_count: 10,
    };
    let report = pipeline::run(&store, &mut rng(), &config).await;

    assert!(!report.all_succeeded());
    assert_eq!(report.failed_steps(), vec![Step::EmissionLogs]);
    // Earlier steps still committed their work.
    assert_eq!(store.row_count(&schema::EMISSION_SOURCES), 93);
    assert_eq!(store.row_count(&schema::EMISSION_FACTORS), 93);
    assert_eq!(store.row_count(&schema::EMISSIONS_LOGS), 0);
}
