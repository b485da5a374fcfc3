//! Engine containers via testcontainers.

use testcontainers::Image;
use testcontainers::core::{ContainerPort, WaitFor};
use testdb_dialect::Engine;

/// A database engine container definition.
///
/// One type covers all supported engines; the engine picks the image,
/// environment and readiness condition. Used by opt-in end-to-end runs
/// that talk to a real server instead of the in-memory mock.
#[derive(Debug, Clone)]
pub struct EngineContainer {
    engine: Engine,
    password: String,
    tag: String,
}

impl EngineContainer {
    /// Container definition for `engine` with default password and tag.
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let (password, tag) = match engine {
            Engine::SqlServer => ("Password123!", "2022-latest"),
            Engine::MySql => ("mysql", "8.4"),
            Engine::PostgreSql => ("postgres", "17"),
        };
        Self {
            engine,
            password: password.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Set the administrative password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the image tag (engine version).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The engine this container runs.
    #[must_use]
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// The port the engine listens on inside the container.
    #[must_use]
    pub fn port(&self) -> u16 {
        match self.engine {
            Engine::SqlServer => 1433,
            Engine::MySql => 3306,
            Engine::PostgreSql => 5432,
        }
    }

    /// Administrative connection string for the container, given the host
    /// port the engine port was mapped to.
    #[must_use]
    pub fn admin_connection_string(&self, host_port: u16) -> String {
        match self.engine {
            Engine::SqlServer => format!(
                "Server=localhost,{host_port};Database=master;User Id=sa;Password={};TrustServerCertificate=true",
                self.password
            ),
            Engine::MySql => format!(
                "Server=localhost;Port={host_port};User Id=root;Password={}",
                self.password
            ),
            Engine::PostgreSql => format!(
                "Server=localhost;Port={host_port};Database=postgres;User Id=postgres;Password={}",
                self.password
            ),
        }
    }
}

impl Image for EngineContainer {
    fn name(&self) -> &str {
        match self.engine {
            Engine::SqlServer => "mcr.microsoft.com/mssql/server",
            Engine::MySql => "mysql",
            Engine::PostgreSql => "postgres",
        }
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn ready_conditions(&self) -> Vec<WaitFor> {
        match self.engine {
            Engine::SqlServer => vec![
                WaitFor::message_on_stdout("SQL Server is now ready for client connections"),
                WaitFor::seconds(5),
            ],
            Engine::MySql => vec![WaitFor::message_on_stderr("ready for connections")],
            Engine::PostgreSql => vec![WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            )],
        }
    }

    fn env_vars(
        &self,
    ) -> impl IntoIterator<
        Item = (
            impl Into<std::borrow::Cow<'_, str>>,
            impl Into<std::borrow::Cow<'_, str>>,
        ),
    > {
        match self.engine {
            Engine::SqlServer => vec![
                ("ACCEPT_EULA".to_string(), "Y".to_string()),
                ("MSSQL_SA_PASSWORD".to_string(), self.password.clone()),
                ("MSSQL_PID".to_string(), "Developer".to_string()),
            ],
            Engine::MySql => vec![("MYSQL_ROOT_PASSWORD".to_string(), self.password.clone())],
            Engine::PostgreSql => vec![("POSTGRES_PASSWORD".to_string(), self.password.clone())],
        }
    }

    fn expose_ports(&self) -> &[ContainerPort] {
        match self.engine {
            Engine::SqlServer => &[ContainerPort::Tcp(1433)],
            Engine::MySql => &[ContainerPort::Tcp(3306)],
            Engine::PostgreSql => &[ContainerPort::Tcp(5432)],
        }
    }
}
