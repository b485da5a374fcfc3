//! The exists, drop, create, rebind, apply-schema workflow.

use std::future::Future;
use std::path::Path;
use std::str::FromStr;

use testdb_dialect::{ConnectionString, Dialect, DialectError, Engine};
use tokio::time::timeout;

use crate::client::{StorageConnector, StorageError};
use crate::config::ProvisionConfig;
use crate::error::{ProvisionError, ProvisionStep};
use crate::session::ProvisioningSession;

/// Provisions disposable test databases.
///
/// One provisioning run is a strictly sequential chain of database round
/// trips: each step depends on the previous one having completed, so
/// steps are never reordered or parallelized, and no step is retried.
/// Callers that want retries rerun the whole
/// [`setup_instance`](Self::setup_instance) call; a run cancelled midway
/// leaves the database in an indeterminate state and must be treated as
/// failed.
///
/// A provisioned database is exclusively owned by its test class for the
/// class's lifetime. Concurrent suites must use distinct database names;
/// no locking is provided.
pub struct Provisioner<C> {
    connector: C,
    config: ProvisionConfig,
}

impl<C: StorageConnector> Provisioner<C> {
    /// Create a provisioner over the given storage connector.
    pub fn new(connector: C, config: ProvisionConfig) -> Self {
        Self { connector, config }
    }

    /// The configuration this provisioner runs with.
    #[must_use]
    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    /// Tear down and recreate `database` on the engine named by
    /// `engine_id`, then apply the engine's setup script to it.
    ///
    /// Safe to rerun: a pre-existing database of the same name is dropped
    /// before the create. On success the returned session holds a fresh
    /// handle bound to the new database and exposes its connection
    /// string.
    #[tracing::instrument(skip(self), err)]
    pub async fn setup_instance(
        &self,
        engine_id: &str,
        database: &str,
    ) -> Result<ProvisioningSession, ProvisionError> {
        let engine = Engine::from_str(engine_id)?;
        let dialect = engine.dialect();

        let admin_cs = self.admin_connection_string(dialect);
        // Parse up front: the same parsed form is rewritten after create.
        let parsed = ConnectionString::from_str(&admin_cs)?;

        let admin = self
            .bounded(ProvisionStep::Connect, self.connector.connect(engine, &admin_cs))
            .await?;

        let count = self
            .bounded(
                ProvisionStep::ExistsCheck,
                admin.query_scalar(&dialect.exists_database(database)),
            )
            .await?;
        let exists = count.unwrap_or(0) > 0;
        tracing::debug!(%engine, database, exists, "exists check");

        if exists {
            self.bounded(ProvisionStep::Drop, admin.execute(&dialect.drop_database(database)))
                .await?;
            tracing::info!(%engine, database, "dropped pre-existing database");
        }

        self.bounded(ProvisionStep::Create, admin.execute(&dialect.create_database(database)))
            .await?;
        tracing::info!(%engine, database, "created database");

        // The admin handle stays bound to its original database; the new
        // database needs a fresh connection.
        drop(admin);
        let database_cs = parsed.with_database(database).to_string();
        let client = self
            .bounded(ProvisionStep::Rebind, self.connector.connect(engine, &database_cs))
            .await?;

        let script = self.read_script(dialect).await?;
        let batches = dialect.split_batches(&script, database)?;
        tracing::debug!(%engine, database, batches = batches.len(), "applying setup script");

        for (index, batch) in batches.iter().enumerate() {
            match timeout(self.config.command_timeout, client.execute(batch)).await {
                Ok(Ok(_)) => {}
                Ok(Err(source)) => return Err(ProvisionError::SchemaSetup { index, source }),
                Err(_) => {
                    return Err(ProvisionError::SchemaSetup {
                        index,
                        source: StorageError::Timeout(self.config.command_timeout),
                    });
                }
            }
        }

        tracing::info!(%engine, database, "database provisioned");
        Ok(ProvisioningSession::new(
            engine,
            database.to_string(),
            database_cs,
            client,
        ))
    }

    /// Drop the session's database from a fresh administrative handle.
    ///
    /// The whole call is bounded by the configured teardown timeout, so a
    /// wedged engine cannot hang suite cleanup indefinitely.
    pub async fn teardown(&self, session: &ProvisioningSession) -> Result<(), ProvisionError> {
        let engine = session.engine();
        let dialect = engine.dialect();
        let admin_cs = self.admin_connection_string(dialect);

        let drop_database = async {
            let admin = self.connector.connect(engine, &admin_cs).await?;
            admin.execute(&dialect.drop_database(session.database())).await?;
            Ok::<(), StorageError>(())
        };

        match timeout(self.config.teardown_timeout, drop_database).await {
            Ok(Ok(())) => {
                tracing::info!(%engine, database = session.database(), "database torn down");
                Ok(())
            }
            Ok(Err(source)) => Err(ProvisionError::Provisioning {
                step: ProvisionStep::Teardown,
                source,
            }),
            Err(_) => Err(ProvisionError::Provisioning {
                step: ProvisionStep::Teardown,
                source: StorageError::Timeout(self.config.teardown_timeout),
            }),
        }
    }

    fn admin_connection_string(&self, dialect: &dyn Dialect) -> String {
        self.config
            .admin_connection_string
            .clone()
            .unwrap_or_else(|| dialect.default_connection_string().to_string())
    }

    async fn read_script(&self, dialect: &dyn Dialect) -> Result<String, ProvisionError> {
        let path: &Path = self
            .config
            .script_path
            .as_deref()
            .unwrap_or_else(|| Path::new(dialect.setup_script_path()));

        tokio::fs::read_to_string(path).await.map_err(|err| {
            DialectError::ScriptParse(format!("cannot read {}: {err}", path.display())).into()
        })
    }

    async fn bounded<T>(
        &self,
        step: ProvisionStep,
        round_trip: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<T, ProvisionError> {
        match timeout(self.config.command_timeout, round_trip).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(ProvisionError::Provisioning { step, source }),
            Err(_) => Err(ProvisionError::Provisioning {
                step,
                source: StorageError::Timeout(self.config.command_timeout),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::client::StorageClient;

    /// Connector that refuses every connection; enough to show which
    /// failures happen before any round trip.
    struct RefusingConnector;

    #[async_trait]
    impl StorageConnector for RefusingConnector {
        async fn connect(
            &self,
            _engine: Engine,
            _connection_string: &str,
        ) -> Result<Box<dyn StorageClient>, StorageError> {
            Err(StorageError::Connection("refused".into()))
        }
    }

    #[test]
    fn test_unknown_engine_fails_before_connecting() {
        let provisioner = Provisioner::new(RefusingConnector, ProvisionConfig::default());
        let err = tokio_test::block_on(provisioner.setup_instance("oracle", "Db1")).unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::Dialect(DialectError::UnsupportedEngine(_))
        ));
    }

    #[test]
    fn test_malformed_admin_connection_string_fails_before_connecting() {
        let config = ProvisionConfig::new().admin_connection_string("not a connection string");
        let provisioner = Provisioner::new(RefusingConnector, config);
        let err = tokio_test::block_on(provisioner.setup_instance("mysql", "Db1")).unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::Dialect(DialectError::MalformedConnectionString(_))
        ));
    }

    #[test]
    fn test_connect_failure_is_reported_with_its_step() {
        let provisioner = Provisioner::new(RefusingConnector, ProvisionConfig::default());
        let err = tokio_test::block_on(provisioner.setup_instance("postgres", "Db1")).unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::Provisioning {
                step: ProvisionStep::Connect,
                ..
            }
        ));
    }
}
