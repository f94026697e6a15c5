//! Run configuration: CLI flags with environment fallbacks.

use clap::Parser;

use crate::pipeline::PipelineConfig;

/// Seed the emissions schema with synthetic data.
#[derive(Parser, Debug)]
#[command(name = "emission-seeder", version, about)]
pub struct SeederArgs {
    /// PostgreSQL connection string. Not needed with --dry-run.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// How many organizations to create.
    #[arg(long, env = "SEED_ORGANIZATIONS", default_value_t = 20)]
    pub organizations: u32,

    /// How many emission-log rows to create.
    #[arg(long, env = "SEED_EMISSION_LOGS", default_value_t = 1000)]
    pub emission_logs: u32,

    /// Connection attempts before giving up.
    #[arg(long, default_value_t = 3)]
    pub connect_attempts: u32,

    /// Delay between connection attempts, in seconds.
    #[arg(long, default_value_t = 5)]
    pub connect_delay_secs: u64,

    /// Skip the CREATE TABLE IF NOT EXISTS bootstrap.
    #[arg(long)]
    pub skip_schema: bool,

    /// Seed for the random source; omit for entropy seeding.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the pipeline against an in-memory store instead of PostgreSQL.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

impl SeederArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            organization_count: self.organizations,
            log_count: self.emission_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_run_parameters() {
        let args = SeederArgs::parse_from(["emission-seeder", "--dry-run"]);
        let config = args.pipeline_config();
        assert_eq!(config.organization_count, 20);
        assert_eq!(config.log_count, 1000);
        assert_eq!(args.connect_attempts, 3);
        assert_eq!(args.connect_delay_secs, 5);
    }
}
