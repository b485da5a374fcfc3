//! # testdb-dialect
//!
//! Engine registry, per-engine SQL templates and script batch splitting
//! for provisioning disposable test databases.
//!
//! Relational engines disagree on the DDL that creates and drops a
//! database, on how a database name is quoted, and on how a multi-statement
//! setup script is cut into independently executable batches. This crate
//! concentrates that divergence behind the [`Dialect`] trait, with one
//! stateless implementation per supported engine, selected through the
//! closed [`Engine`] registry.
//!
//! It also provides the reversible [`ConnectionString`] model used to
//! rebind a connection string to a freshly created database without
//! disturbing any other parameter.
//!
//! ## Example
//!
//! ```rust
//! use std::str::FromStr;
//! use testdb_dialect::{ConnectionString, Engine};
//!
//! let engine = Engine::from_str("sqlserver")?;
//! let dialect = engine.dialect();
//!
//! assert_eq!(dialect.create_database("Db1"), "CREATE DATABASE [Db1]");
//!
//! let cs = ConnectionString::from_str("Server=localhost;User Id=sa")?;
//! assert_eq!(
//!     cs.with_database("Db1").to_string(),
//!     "Server=localhost;User Id=sa;Database=Db1",
//! );
//! # Ok::<(), testdb_dialect::DialectError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod connection_string;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod mssql;
pub mod mysql;
pub mod postgres;
mod split;

pub use connection_string::ConnectionString;
pub use dialect::Dialect;
pub use engine::Engine;
pub use error::DialectError;
pub use mssql::SqlServerDialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use split::DATABASE_NAME_TOKEN;
