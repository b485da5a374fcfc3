//! SQL Server dialect.

use crate::dialect::Dialect;
use crate::engine::Engine;
use crate::error::DialectError;
use crate::split;

/// Dialect for Microsoft SQL Server.
///
/// Batches are separated by a line consisting solely of `GO`, the sqlcmd
/// convention. `GO` is an instruction to the scripting tool, not T-SQL:
/// the server rejects it, so each run of statements between separators
/// must be sent on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerDialect;

impl Dialect for SqlServerDialect {
    fn engine(&self) -> Engine {
        Engine::SqlServer
    }

    fn exists_database(&self, name: &str) -> String {
        format!("SELECT COUNT(1) FROM sys.databases WHERE name = '{name}'")
    }

    fn create_database(&self, name: &str) -> String {
        format!("CREATE DATABASE [{name}]")
    }

    fn drop_database(&self, name: &str) -> String {
        format!("DROP DATABASE [{name}]")
    }

    fn setup_script_path(&self) -> &'static str {
        "scripts/setup_sqlserver.sql"
    }

    fn default_connection_string(&self) -> &'static str {
        "Server=localhost;Database=master;User Id=sa;Password=Password123!;TrustServerCertificate=true"
    }

    fn split_batches(&self, script: &str, database: &str) -> Result<Vec<String>, DialectError> {
        split::ensure_not_empty(script)?;
        let script = split::substitute_database_name(script, database);
        Ok(split::split_on_go(&script))
    }
}
