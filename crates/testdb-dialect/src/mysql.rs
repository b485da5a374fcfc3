//! MySQL dialect.

use crate::dialect::Dialect;
use crate::engine::Engine;
use crate::error::DialectError;
use crate::split;

/// Dialect for MySQL and MariaDB.
///
/// Statements end at a semicolon-terminated line and must be executed one
/// at a time; MariaDB in particular refuses multiple DDL statements in a
/// single command.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn engine(&self) -> Engine {
        Engine::MySql
    }

    fn exists_database(&self, name: &str) -> String {
        format!("SELECT COUNT(1) FROM information_schema.schemata WHERE schema_name = '{name}'")
    }

    fn create_database(&self, name: &str) -> String {
        format!("CREATE DATABASE `{name}`")
    }

    fn drop_database(&self, name: &str) -> String {
        format!("DROP DATABASE `{name}`")
    }

    fn setup_script_path(&self) -> &'static str {
        "scripts/setup_mysql.sql"
    }

    fn default_connection_string(&self) -> &'static str {
        "Server=localhost;Port=3306;User Id=root;Password=mysql"
    }

    fn split_batches(&self, script: &str, database: &str) -> Result<Vec<String>, DialectError> {
        split::ensure_not_empty(script)?;
        let script = split::substitute_database_name(script, database);
        Ok(split::split_on_terminator(&script))
    }
}
