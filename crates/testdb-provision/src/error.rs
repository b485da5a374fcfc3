//! Provisioning error types.

use std::fmt;

use testdb_dialect::DialectError;
use thiserror::Error;

use crate::client::StorageError;

/// The provisioning step a database round trip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    /// Opening the administrative handle.
    Connect,
    /// Running the exists-check query.
    ExistsCheck,
    /// Dropping the pre-existing database.
    Drop,
    /// Creating the database.
    Create,
    /// Opening the handle bound to the new database.
    Rebind,
    /// Dropping the database during teardown.
    Teardown,
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            ProvisionStep::Connect => "connect",
            ProvisionStep::ExistsCheck => "exists check",
            ProvisionStep::Drop => "drop",
            ProvisionStep::Create => "create",
            ProvisionStep::Rebind => "rebind",
            ProvisionStep::Teardown => "teardown",
        };
        f.write_str(step)
    }
}

/// Errors raised while provisioning a test database.
///
/// Nothing here is retried internally; any retry policy belongs to the
/// caller, which reruns the whole provisioning call from scratch.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Engine resolution, connection-string parsing or script parsing
    /// failed.
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// A DDL round trip failed. Fatal for the current run.
    #[error("provisioning failed during {step}: {source}")]
    Provisioning {
        /// The step that failed.
        step: ProvisionStep,
        /// The underlying storage failure.
        source: StorageError,
    },

    /// A schema batch failed; batches after it were not executed.
    #[error("schema setup failed at batch {index}: {source}")]
    SchemaSetup {
        /// 0-based index of the failing batch, in script order.
        index: usize,
        /// The underlying storage failure.
        source: StorageError,
    },
}
