//! One-shot seeding binary.
//!
//! Waits for the store to accept connections (bounded retry), optionally
//! bootstraps the schema, runs the generation pipeline and exits nonzero
//! if any step failed.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use emission_seeder::config::SeederArgs;
use emission_seeder::pipeline::{self, PipelineReport};
use emission_seeder::store::{MemorySeedStore, PgSeedStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = SeederArgs::parse();
    let config = args.pipeline_config();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = if args.dry_run {
        info!("dry run: seeding an in-memory store");
        let store = MemorySeedStore::new();
        pipeline::run(&store, &mut rng, &config).await
    } else {
        let url = args
            .database_url
            .as_deref()
            .context("DATABASE_URL must be set (or pass --dry-run)")?;
        let store = PgSeedStore::connect(
            url,
            args.connect_attempts,
            Duration::from_secs(args.connect_delay_secs),
        )
        .await?;
        if !args.skip_schema {
            store.ensure_schema().await?;
        }
        pipeline::run(&store, &mut rng, &config).await
    };

    summarize(&report, args.json)?;

    if !report.all_succeeded() {
        let failed: Vec<&str> = report.failed_steps().iter().map(|s| s.as_str()).collect();
        bail!("pipeline finished with failed steps: {}", failed.join(", "));
    }
    Ok(())
}

fn summarize(report: &PipelineReport, json: bool) -> Result<()> {
    info!(
        total_rows_written = report.total_rows_written(),
        steps_failed = report.failed_steps().len(),
        "pipeline finished"
    );
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    }
    Ok(())
}
