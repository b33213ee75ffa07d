use std::{env, future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::{
    vet_specialty::{repo::seaorm::SeaOrmVetSpecialtyRepository, repository::VetSpecialtyRepository},
    DynVetSpecialtyService, VetSpecialtyService,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); without a file, fall back to env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    load_config_from(&configs::default_path())
}

/// A file that exists but cannot be read or parsed is an error, never replaced by defaults.
pub fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    let loaded = configs::load_optional(path).map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let mut cfg = loaded.unwrap_or_else(config_from_env);
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn config_from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    if let Some(w) = env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
        cfg.server.worker_threads = Some(w);
    }
    cfg
}

fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}:{}: {e}", cfg.host, cfg.port)))
}

/// Service backed by the relational store.
pub fn vet_specialty_service(db: DatabaseConnection) -> Arc<DynVetSpecialtyService> {
    let repo: Arc<dyn VetSpecialtyRepository> = Arc::new(SeaOrmVetSpecialtyRepository::new(db));
    Arc::new(VetSpecialtyService::new(repo))
}

/// Router with all routes and layers, around an already constructed service.
pub fn build_app(vet_specialties: Arc<DynVetSpecialtyService>) -> Router {
    routes::build_router(build_cors(), ServerState { vet_specialties })
}

/// Connect, migrate, bind and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }

    let app = build_app(vet_specialty_service(db));

    let addr = bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "vet clinic server listening");
    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_parses_host_and_port() {
        let cfg = configs::ServerConfig { host: "127.0.0.1".into(), port: 8081, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:8081".parse::<SocketAddr>().unwrap());

        let bad = configs::ServerConfig { host: "not a host".into(), port: 8081, worker_threads: None };
        assert!(matches!(bind_addr(&bad), Err(StartupError::InvalidConfig(_))));
    }

    fn scratch_file(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("server-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn malformed_config_file_is_rejected() {
        let path = scratch_file("malformed", "[database\nurl = ");
        let res = load_config_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(res, Err(StartupError::InvalidConfig(msg)) if msg.contains(&path)));
    }

    #[test]
    fn config_file_is_normalized_and_validated() {
        let path = scratch_file(
            "valid",
            "[server]\nhost = \"\"\nport = 8088\n\n[database]\nurl = \"sqlite::memory:\"\n",
        );
        let res = load_config_from(&path);
        let _ = std::fs::remove_file(&path);
        let cfg = res.unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }
}
