//! Error taxonomy for the seeding pipeline.
//!
//! Generator-level failures are typed so the orchestrator can record what
//! actually went wrong instead of guessing from a log line. Row-level
//! rejections inside the fact generator are deliberately *not* a variant
//! here: they are logged with the offending row and counted in the step
//! report, and never abort the step.

use thiserror::Error;

use crate::store::StoreError;

/// Step-fatal failures surfaced to the pipeline orchestrator.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("store unreachable after {attempts} connection attempts")]
    Connectivity {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("batch insert into '{table}' rejected by the store")]
    BatchInsert {
        table: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("insert into '{table}' failed")]
    Insert {
        table: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("read-back of '{table}.{column}' failed")]
    ReadBack {
        table: &'static str,
        column: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("no rows available in '{table}' to reference; earlier pipeline steps produced nothing")]
    MissingReferenceData { table: &'static str },
}

pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reference_data_message_names_table() {
        let err = SeedError::MissingReferenceData {
            table: "organizations",
        };
        assert!(err.to_string().contains("organizations"));
    }
}
