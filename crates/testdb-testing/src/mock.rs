//! In-memory mock storage engine.
//!
//! Lets the whole provisioning workflow run with no server and no Docker:
//! the mock tracks which databases exist, answers the dialects'
//! exists-count queries, interprets `CREATE DATABASE` and `DROP DATABASE`
//! DDL, and records every executed statement together with the connection
//! string of the handle that ran it.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use testdb_provision::{Engine, StorageClient, StorageConnector, StorageError};

/// One statement executed through a mock handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedStatement {
    /// Connection string of the handle that ran the statement.
    pub connection_string: String,
    /// The SQL text, verbatim.
    pub sql: String,
}

#[derive(Default)]
struct MockState {
    databases: BTreeSet<String>,
    executed: Vec<ExecutedStatement>,
    connections_opened: u64,
    fail_on: Option<String>,
}

/// A mock storage engine shared by every handle it opens.
///
/// Cloning yields another view onto the same state, so a test can keep a
/// copy for assertions while the provisioner owns the connector.
#[derive(Clone, Default)]
pub struct MockStorage {
    state: Arc<Mutex<MockState>>,
}

impl MockStorage {
    /// Create an empty mock engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create a database, as if an earlier run left it behind.
    pub fn seed_database(&self, name: impl Into<String>) {
        self.state.lock().databases.insert(name.into());
    }

    /// Fail any executed statement containing `fragment`.
    pub fn fail_when_contains(&self, fragment: impl Into<String>) {
        self.state.lock().fail_on = Some(fragment.into());
    }

    /// Whether the named database currently exists.
    #[must_use]
    pub fn has_database(&self, name: &str) -> bool {
        self.state.lock().databases.contains(name)
    }

    /// Every statement executed so far, in execution order.
    #[must_use]
    pub fn executed(&self) -> Vec<ExecutedStatement> {
        self.state.lock().executed.clone()
    }

    /// How many handles have been opened.
    #[must_use]
    pub fn connections_opened(&self) -> u64 {
        self.state.lock().connections_opened
    }
}

#[async_trait]
impl StorageConnector for MockStorage {
    async fn connect(
        &self,
        engine: Engine,
        connection_string: &str,
    ) -> Result<Box<dyn StorageClient>, StorageError> {
        let mut state = self.state.lock();
        state.connections_opened += 1;
        tracing::debug!(%engine, connection_string, "mock connection opened");

        Ok(Box::new(MockClient {
            engine,
            connection_string: connection_string.to_string(),
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockClient {
    engine: Engine,
    connection_string: String,
    state: Arc<Mutex<MockState>>,
}

/// Strip quoting (brackets, backticks, double quotes) and a trailing
/// semicolon from an identifier.
fn unquote(identifier: &str) -> String {
    identifier
        .trim()
        .trim_end_matches(';')
        .trim_matches(|c| matches!(c, '[' | ']' | '`' | '"'))
        .to_string()
}

#[async_trait]
impl StorageClient for MockClient {
    fn engine(&self) -> Engine {
        self.engine
    }

    fn connection_string(&self) -> &str {
        &self.connection_string
    }

    async fn execute(&self, sql: &str) -> Result<u64, StorageError> {
        let mut state = self.state.lock();

        if let Some(fragment) = state.fail_on.as_deref() {
            if sql.contains(fragment) {
                return Err(StorageError::Execution(format!(
                    "injected failure on statement containing {fragment:?}"
                )));
            }
        }

        state.executed.push(ExecutedStatement {
            connection_string: self.connection_string.clone(),
            sql: sql.to_string(),
        });

        let trimmed = sql.trim();
        let upper = trimmed.to_ascii_uppercase();
        if upper.starts_with("CREATE DATABASE") {
            let name = unquote(&trimmed["CREATE DATABASE".len()..]);
            if !state.databases.insert(name.clone()) {
                return Err(StorageError::Execution(format!(
                    "database {name} already exists"
                )));
            }
        } else if upper.starts_with("DROP DATABASE") {
            let name = unquote(&trimmed["DROP DATABASE".len()..]);
            if !state.databases.remove(&name) {
                return Err(StorageError::Execution(format!(
                    "database {name} does not exist"
                )));
            }
        }

        Ok(0)
    }

    async fn query_scalar(&self, sql: &str) -> Result<Option<i64>, StorageError> {
        let state = self.state.lock();

        // Exists-count queries carry the candidate name as a quoted literal.
        let name = sql.split('\'').nth(1).ok_or_else(|| {
            StorageError::Execution(format!("unrecognized scalar query: {sql}"))
        })?;

        Ok(Some(i64::from(state.databases.contains(name))))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_drop_database() {
        let mock = MockStorage::new();
        let client =
            tokio_test::block_on(mock.connect(Engine::SqlServer, "Server=localhost")).unwrap();

        tokio_test::block_on(client.execute("CREATE DATABASE [Db1]")).unwrap();
        assert!(mock.has_database("Db1"));

        tokio_test::block_on(client.execute("DROP DATABASE [Db1]")).unwrap();
        assert!(!mock.has_database("Db1"));
    }

    #[test]
    fn test_quoting_styles_resolve_to_the_same_name() {
        let mock = MockStorage::new();
        let client = tokio_test::block_on(mock.connect(Engine::MySql, "Server=h")).unwrap();

        tokio_test::block_on(client.execute("CREATE DATABASE `Db1`")).unwrap();
        tokio_test::block_on(client.execute("DROP DATABASE \"Db1\";")).unwrap();
        assert!(!mock.has_database("Db1"));
    }

    #[test]
    fn test_exists_count_query() {
        let mock = MockStorage::new();
        mock.seed_database("Present");
        let client = tokio_test::block_on(mock.connect(Engine::PostgreSql, "Server=h")).unwrap();

        let present = tokio_test::block_on(
            client.query_scalar("SELECT COUNT(1) FROM pg_database WHERE datname = 'Present'"),
        )
        .unwrap();
        assert_eq!(present, Some(1));

        let absent = tokio_test::block_on(
            client.query_scalar("SELECT COUNT(1) FROM pg_database WHERE datname = 'Absent'"),
        )
        .unwrap();
        assert_eq!(absent, Some(0));
    }

    #[test]
    fn test_double_create_fails() {
        let mock = MockStorage::new();
        let client = tokio_test::block_on(mock.connect(Engine::SqlServer, "Server=h")).unwrap();

        tokio_test::block_on(client.execute("CREATE DATABASE [Db1]")).unwrap();
        assert!(tokio_test::block_on(client.execute("CREATE DATABASE [Db1]")).is_err());
    }

    #[test]
    fn test_failure_injection() {
        let mock = MockStorage::new();
        mock.fail_when_contains("boom");
        let client = tokio_test::block_on(mock.connect(Engine::SqlServer, "Server=h")).unwrap();

        assert!(tokio_test::block_on(client.execute("SELECT 'boom'")).is_err());
        tokio_test::block_on(client.execute("SELECT 1")).unwrap();

        // Failed statements are not recorded.
        let executed = mock.executed();
        assert_eq!(executed.len(), 1);
        assert_eq!(executed[0].sql, "SELECT 1");
    }
}
