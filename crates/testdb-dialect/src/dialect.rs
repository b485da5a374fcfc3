//! The per-engine dialect capability interface.

use crate::engine::Engine;
use crate::error::DialectError;

/// Engine-specific SQL templates and script batch splitting.
///
/// Implementations are stateless unit structs, one per engine; there is no
/// shared base state. Each template method has exactly one substitution
/// point, the database name. Names containing the dialect's own quoting
/// delimiter are unsupported: database names come from the test suite
/// itself, never from untrusted input.
pub trait Dialect: Send + Sync {
    /// The engine this dialect serves.
    fn engine(&self) -> Engine;

    /// Query returning a count greater than zero when the named database
    /// exists.
    fn exists_database(&self, name: &str) -> String;

    /// DDL creating the named database.
    fn create_database(&self, name: &str) -> String;

    /// DDL dropping the named database.
    fn drop_database(&self, name: &str) -> String;

    /// Default path of this engine's schema-setup script, relative to the
    /// repository root. Test suites usually override it through their
    /// provisioning configuration.
    fn setup_script_path(&self) -> &'static str;

    /// A connection string usable before any test database exists.
    fn default_connection_string(&self) -> &'static str;

    /// Substitute the database name into `script` and split the result
    /// into independently executable batches.
    ///
    /// Batch order matches source order and must be preserved by callers;
    /// batches that are blank or contain only line comments are dropped.
    /// An empty script is [`DialectError::ScriptParse`].
    fn split_batches(&self, script: &str, database: &str) -> Result<Vec<String>, DialectError>;
}
