//! Dialect error types.

use thiserror::Error;

/// Errors raised by the dialect layer.
#[derive(Debug, Error)]
pub enum DialectError {
    /// The engine identifier is not in the registry.
    ///
    /// This is a configuration error: the set of supported engines is
    /// fixed at compile time.
    #[error("unsupported engine: {0:?}")]
    UnsupportedEngine(String),

    /// A connection string could not be parsed.
    #[error("malformed connection string: {0}")]
    MalformedConnectionString(String),

    /// The setup script is empty or could not be read.
    ///
    /// Setup scripts ship with the test suite, so this usually indicates
    /// a packaging problem rather than a runtime condition.
    #[error("script parse error: {0}")]
    ScriptParse(String),
}
