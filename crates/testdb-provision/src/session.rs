//! The provisioned-database session.

use std::fmt;

use testdb_dialect::Engine;

use crate::client::StorageClient;

/// The immutable result of a successful provisioning run.
///
/// Pairs the recreated database with a live storage handle bound to it.
/// A session is created once per test-class initialization and held for
/// the suite's lifetime; re-provisioning under another database name
/// yields a new session that supersedes this one; sessions are never
/// edited in place. Teardown is ordinary scope exit, or an explicit
/// [`Provisioner::teardown`](crate::Provisioner::teardown) call.
pub struct ProvisioningSession {
    engine: Engine,
    database: String,
    connection_string: String,
    client: Box<dyn StorageClient>,
}

impl ProvisioningSession {
    pub(crate) fn new(
        engine: Engine,
        database: String,
        connection_string: String,
        client: Box<dyn StorageClient>,
    ) -> Self {
        Self {
            engine,
            database,
            connection_string,
            client,
        }
    }

    /// The engine the database was provisioned on.
    #[must_use]
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// The provisioned database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The connection string bound to the provisioned database.
    #[must_use]
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// The live handle bound to the provisioned database.
    #[must_use]
    pub fn client(&self) -> &dyn StorageClient {
        self.client.as_ref()
    }
}

impl fmt::Debug for ProvisioningSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisioningSession")
            .field("engine", &self.engine)
            .field("database", &self.database)
            .field("connection_string", &self.connection_string)
            .finish_non_exhaustive()
    }
}
