//! # testdb-testing
//!
//! Test infrastructure for the test-database provisioner.
//!
//! ## Features
//!
//! - In-memory mock storage engine (no server, no Docker required)
//! - Database engine containers via testcontainers
//! - Setup-script fixtures on disk
//!
//! ## Mock Example
//!
//! ```rust,ignore
//! use testdb_provision::{ProvisionConfig, Provisioner};
//! use testdb_testing::{MockStorage, ScriptFixture, fixtures};
//!
//! #[tokio::test]
//! async fn provisions_a_fresh_database() {
//!     let mock = MockStorage::new();
//!     let script = ScriptFixture::new(fixtures::membership_script_sqlserver()).unwrap();
//!
//!     let config = ProvisionConfig::new().script_path(script.path());
//!     let provisioner = Provisioner::new(mock.clone(), config);
//!
//!     let session = provisioner.setup_instance("sqlserver", "TestDb1").await.unwrap();
//!     assert!(mock.has_database("TestDb1"));
//!     assert!(session.connection_string().contains("Database=TestDb1"));
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod containers;
pub mod fixtures;
pub mod mock;

pub use containers::EngineContainer;
pub use fixtures::ScriptFixture;
pub use mock::{ExecutedStatement, MockStorage};
