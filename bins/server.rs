use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging_from(format: &str) {
    let fmt = format.parse::<LogFormat>().unwrap_or_else(|e| {
        eprintln!("{e}; falling back to compact logs");
        LogFormat::Compact
    });
    init_logging(fmt);
    info!(service = "vet-clinic", event = "logger_init", format = ?fmt, "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // 提前加载 .env，使得 RUST_LOG / DATABASE_URL 等环境变量生效
    dotenv().ok();

    // 配置优先 config.toml，其次环境变量
    let cfg = server::load_config();
    let log_format = match &cfg {
        Ok(cfg) => cfg.logging.format.clone(),
        Err(_) => std::env::var("LOG_FORMAT").unwrap_or_default(),
    };
    init_logging_from(if log_format.is_empty() { "compact" } else { &log_format });

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "vet-clinic", event = "config_invalid", error = %e, "cannot start without a valid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(
        service = "vet-clinic",
        event = "config_loaded",
        host = %cfg.server.host,
        port = cfg.server.port,
        auto_migrate = cfg.database.auto_migrate,
        "configuration loaded"
    );

    // 基础服务上下文（不含敏感信息）
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志，便于排查问题
    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "vet-clinic",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "vet-clinic", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "vet-clinic",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "vet clinic service starting"
    );

    // server::run 内部监听 Ctrl+C 并优雅停机
    rt.block_on(async move {
        match tokio::spawn(server::run(cfg)).await {
            Ok(Ok(())) => {
                info!(service = "vet-clinic", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = "vet-clinic", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
            Err(e) => {
                warn!(service = "vet-clinic", event = "task_join_error", error = %e, "server task join error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
