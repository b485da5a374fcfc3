//! Provisioner configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a [`Provisioner`](crate::Provisioner).
///
/// Timeouts are explicit per-instance values; there is no process-wide
/// mutable default for tests to poke at.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Administrative connection string used before the test database
    /// exists. When `None`, the dialect's default connection string is
    /// used.
    pub admin_connection_string: Option<String>,

    /// Override for the dialect's setup-script path.
    pub script_path: Option<PathBuf>,

    /// Timeout applied to each database round trip (default: 30s).
    pub command_timeout: Duration,

    /// Timeout applied to the whole teardown call (default: 10s).
    pub teardown_timeout: Duration,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            admin_connection_string: None,
            script_path: None,
            command_timeout: Duration::from_secs(30),
            teardown_timeout: Duration::from_secs(10),
        }
    }
}

impl ProvisionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the administrative connection string.
    #[must_use]
    pub fn admin_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.admin_connection_string = Some(connection_string.into());
        self
    }

    /// Set the setup-script path, overriding the dialect's default.
    #[must_use]
    pub fn script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    /// Set the per-round-trip command timeout.
    #[must_use]
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Set the teardown timeout.
    #[must_use]
    pub fn teardown_timeout(mut self, timeout: Duration) -> Self {
        self.teardown_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProvisionConfig::default();
        assert!(config.admin_connection_string.is_none());
        assert!(config.script_path.is_none());
        assert_eq!(config.command_timeout, Duration::from_secs(30));
        assert_eq!(config.teardown_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder() {
        let config = ProvisionConfig::new()
            .admin_connection_string("Server=db;User Id=sa")
            .script_path("custom/setup.sql")
            .command_timeout(Duration::from_secs(5))
            .teardown_timeout(Duration::from_secs(2));

        assert_eq!(
            config.admin_connection_string.as_deref(),
            Some("Server=db;User Id=sa")
        );
        assert_eq!(config.script_path.as_deref(), Some(Path::new("custom/setup.sql")));
        assert_eq!(config.command_timeout, Duration::from_secs(5));
        assert_eq!(config.teardown_timeout, Duration::from_secs(2));
    }
}
