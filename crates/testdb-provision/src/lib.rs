//! # testdb-provision
//!
//! Drop-recreate-schema-apply provisioning of disposable relational
//! databases for integration test suites.
//!
//! Given an engine identifier and a target database name, a
//! [`Provisioner`] tears down any pre-existing database of that name,
//! recreates it, applies the engine's schema-setup script to it batch by
//! batch, and returns a [`ProvisioningSession`] holding a live handle and
//! the connection string bound to the new database.
//!
//! The generic storage-execution layer (drivers, pooling, result mapping)
//! stays outside this crate: the provisioner reaches it through the
//! [`StorageClient`]/[`StorageConnector`] traits, so any driver stack can
//! be plugged in underneath.
//!
//! ## Example
//!
//! ```rust,ignore
//! use testdb_provision::{ProvisionConfig, Provisioner};
//!
//! # async fn run(connector: impl testdb_provision::StorageConnector) -> Result<(), Box<dyn std::error::Error>> {
//! let provisioner = Provisioner::new(connector, ProvisionConfig::default());
//!
//! // Safe to rerun: an existing MembershipTests database is dropped first.
//! let session = provisioner.setup_instance("sqlserver", "MembershipTests").await?;
//! assert!(session.connection_string().contains("Database=MembershipTests"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod provisioner;
pub mod session;

pub use client::{StorageClient, StorageConnector, StorageError};
pub use config::ProvisionConfig;
pub use error::{ProvisionError, ProvisionStep};
pub use provisioner::Provisioner;
pub use session::ProvisioningSession;

// Re-export the dialect layer: engine resolution and connection strings
// are part of the public provisioning surface.
pub use testdb_dialect::{ConnectionString, Dialect, DialectError, Engine};
