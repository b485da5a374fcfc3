//! PostgreSQL dialect.

use crate::dialect::Dialect;
use crate::engine::Engine;
use crate::error::DialectError;
use crate::split;

/// Dialect for PostgreSQL.
///
/// The simple query protocol executes a multi-statement string in one
/// round trip, so the whole setup script is a single batch. The default
/// connection string targets the `postgres` maintenance database, which
/// always exists and from which other databases can be created.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn engine(&self) -> Engine {
        Engine::PostgreSql
    }

    fn exists_database(&self, name: &str) -> String {
        format!("SELECT COUNT(1) FROM pg_database WHERE datname = '{name}'")
    }

    fn create_database(&self, name: &str) -> String {
        format!("CREATE DATABASE \"{name}\"")
    }

    fn drop_database(&self, name: &str) -> String {
        format!("DROP DATABASE \"{name}\"")
    }

    fn setup_script_path(&self) -> &'static str {
        "scripts/setup_postgres.sql"
    }

    fn default_connection_string(&self) -> &'static str {
        "Server=localhost;Port=5432;Database=postgres;User Id=postgres;Password=postgres"
    }

    fn split_batches(&self, script: &str, database: &str) -> Result<Vec<String>, DialectError> {
        split::ensure_not_empty(script)?;
        let script = split::substitute_database_name(script, database);
        if split::is_executable(&script) {
            Ok(vec![script.trim().to_string()])
        } else {
            Ok(Vec::new())
        }
    }
}
