//! Storage-execution traits consumed by the provisioner.
//!
//! The relational execution layer (drivers, pooling, parameter binding,
//! result mapping) lives outside this crate. The provisioner only needs
//! the two small capabilities below, kept object-safe (via `async_trait`)
//! so the orchestrator can hold handles dynamically.

use std::time::Duration;

use async_trait::async_trait;
use testdb_dialect::Engine;
use thiserror::Error;

/// Errors surfaced by the storage-execution layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to open a connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// A statement failed to execute.
    #[error("execution failed: {0}")]
    Execution(String),

    /// A round trip exceeded the configured timeout.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// A live handle bound to one connection string.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// The engine this handle talks to.
    fn engine(&self) -> Engine;

    /// The connection string this handle was opened with.
    fn connection_string(&self) -> &str;

    /// Execute a statement, returning the number of rows affected.
    async fn execute(&self, sql: &str) -> Result<u64, StorageError>;

    /// Execute a query expected to yield a single integer scalar.
    ///
    /// Returns `None` when the query produced no rows.
    async fn query_scalar(&self, sql: &str) -> Result<Option<i64>, StorageError>;
}

/// Opens [`StorageClient`] handles.
#[async_trait]
pub trait StorageConnector: Send + Sync {
    /// Open a handle for `engine` on `connection_string`.
    ///
    /// The provisioner asks for a fresh handle after recreating the
    /// target database: most engines require a new connection to address
    /// a newly created database, so the handle bound to the
    /// administrative database is discarded, never rebound.
    async fn connect(
        &self,
        engine: Engine,
        connection_string: &str,
    ) -> Result<Box<dyn StorageClient>, StorageError>;
}
