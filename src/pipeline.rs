//! Pipeline orchestrator.
//!
//! Runs the four generation steps in fixed dependency order:
//! organizations → emission sources → emission factors → emission logs.
//! A failed step is recorded and the run proceeds — downstream steps read
//! back whatever data actually exists, so an early failure can cascade into
//! `MissingReferenceData` later, and the report will show both. No step is
//! retried.

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{error, info};

use crate::error::SeedError;
use crate::generate::{
    generate_emission_factors, generate_emission_logs, generate_emission_sources,
    generate_organizations, StepReport,
};
use crate::store::SeedStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    Organizations,
    EmissionSources,
    EmissionFactors,
    EmissionLogs,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Organizations => "organizations",
            Step::EmissionSources => "emission_sources",
            Step::EmissionFactors => "emission_factors",
            Step::EmissionLogs => "emission_logs",
        }
    }
}

/// Outcome of one pipeline step.
#[derive(Debug, Serialize)]
pub enum StepOutcome {
    Completed {
        step: Step,
        report: StepReport,
    },
    Failed {
        step: Step,
        #[serde(serialize_with = "serialize_error")]
        error: SeedError,
    },
}

fn serialize_error<S: serde::Serializer>(error: &SeedError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineConfig {
    pub organization_count: u32,
    pub log_count: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            organization_count: 20,
            log_count: 1000,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct PipelineReport {
    pub steps: Vec<StepOutcome>,
}

impl PipelineReport {
    pub fn all_succeeded(&self) -> bool {
        self.steps
            .iter()
            .all(|s| matches!(s, StepOutcome::Completed { .. }))
    }

    pub fn failed_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                StepOutcome::Failed { step, .. } => Some(*step),
                StepOutcome::Completed { .. } => None,
            })
            .collect()
    }

    pub fn total_rows_written(&self) -> u64 {
        self.steps
            .iter()
            .map(|s| match s {
                StepOutcome::Completed { report, .. } => report.rows_written,
                StepOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    fn record(&mut self, step: Step, result: Result<StepReport, SeedError>) {
        match result {
            Ok(report) => self.steps.push(StepOutcome::Completed { step, report }),
            Err(err) => {
                error!(step = step.as_str(), error = %err, "pipeline step failed");
                self.steps.push(StepOutcome::Failed { step, error: err });
            }
        }
    }
}

/// Execute the full seeding pipeline against `store`.
pub async fn run(
    store: &dyn SeedStore,
    rng: &mut StdRng,
    config: &PipelineConfig,
) -> PipelineReport {
    let mut report = PipelineReport::default();

    info!("step 1 - generate organizations");
    let result = generate_organizations(store, rng, config.organization_count).await;
    report.record(Step::Organizations, result);

    info!("step 2 - generate emission sources");
    let result = generate_emission_sources(store, rng).await;
    report.record(Step::EmissionSources, result);

    info!("step 3 - generate emission factors");
    let result = generate_emission_factors(store, rng).await;
    report.record(Step::EmissionFactors, result);

    info!("step 4 - generate emission logs");
    let result = generate_emission_logs(store, rng, config.log_count).await;
    report.record(Step::EmissionLogs, result);

    report
}
