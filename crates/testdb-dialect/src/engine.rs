//! Engine identifiers and the static engine registry.

use std::fmt;
use std::str::FromStr;

use crate::dialect::Dialect;
use crate::error::DialectError;
use crate::mssql::SqlServerDialect;
use crate::mysql::MySqlDialect;
use crate::postgres::PostgresDialect;

/// A supported relational database engine.
///
/// The set is closed: adding an engine means adding a variant here
/// together with its [`Dialect`] implementation. There is no runtime
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Microsoft SQL Server.
    SqlServer,
    /// MySQL or MariaDB.
    MySql,
    /// PostgreSQL.
    PostgreSql,
}

impl Engine {
    /// Every supported engine, in registry order.
    pub const ALL: [Engine; 3] = [Engine::SqlServer, Engine::MySql, Engine::PostgreSql];

    /// The canonical identifier for this engine.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::SqlServer => "sqlserver",
            Engine::MySql => "mysql",
            Engine::PostgreSql => "postgres",
        }
    }

    /// The dialect implementation for this engine.
    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        match self {
            Engine::SqlServer => &SqlServerDialect,
            Engine::MySql => &MySqlDialect,
            Engine::PostgreSql => &PostgresDialect,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = DialectError;

    /// Resolve an engine identifier.
    ///
    /// Accepts the canonical names plus the `mssql` and `postgresql`
    /// aliases, case-insensitively. Anything else is
    /// [`DialectError::UnsupportedEngine`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlserver" | "mssql" => Ok(Engine::SqlServer),
            "mysql" => Ok(Engine::MySql),
            "postgres" | "postgresql" => Ok(Engine::PostgreSql),
            _ => Err(DialectError::UnsupportedEngine(s.to_string())),
        }
    }
}
