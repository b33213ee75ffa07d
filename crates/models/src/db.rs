use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

const SQLITE_MEMORY: &str = "sqlite::memory:";

/// Lifetime given to the single in-memory SQLite connection. Closing it drops the
/// database, so the pool must never retire it for age or idleness.
const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

/// Pool settings used to open a [`DatabaseConnection`].
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Private in-memory SQLite database, used by tests.
    pub fn sqlite_memory() -> Self {
        let mut cfg = Self::from(&configs::DatabaseConfig::default());
        cfg.url = SQLITE_MEMORY.to_string();
        cfg
    }

    fn is_sqlite_memory(&self) -> bool {
        self.url.starts_with(SQLITE_MEMORY) || self.url.contains("mode=memory")
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging);

        if self.is_sqlite_memory() {
            // Every pooled connection would get its own empty database; keep exactly one alive.
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(IN_MEMORY_KEEPALIVE)
                .max_lifetime(IN_MEMORY_KEEPALIVE);
        } else {
            opt.max_connections(self.max_connections)
                .min_connections(self.min_connections)
                .idle_timeout(self.idle_timeout)
                .max_lifetime(self.max_lifetime);
        }
        opt
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let opt = cfg.connect_options();
    let max_connections = opt.get_max_connections();
    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), ?max_connections, "database connected");
    Ok(db)
}
