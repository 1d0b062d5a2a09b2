//! Todo App - HTTP/JSON Todo 服务
//!
//! 启动顺序：配置 → 日志 → 连接池 → TodoService（建表）→ HTTP 服务器

use std::sync::Arc;

use todoapp::application::TodoService;
use todoapp::config::{load_config, print_config};
use todoapp::infrastructure::http::{AppState, HttpServer, ServerConfig};
use todoapp::infrastructure::persistence::sqlite::{create_pool, DatabaseConfig};
use todoapp::infrastructure::SqliteTodoRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},todoapp={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Todo App");
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;

    // 建表失败时直接退出
    let repo = Arc::new(SqliteTodoRepository::new(pool.clone()));
    let todo_service = Arc::new(TodoService::new(repo).await?);

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_files(
            &config.server.static_files.dir,
            &config.server.static_files.path,
        );
    }

    let server = HttpServer::new(server_config, AppState::new(todo_service));

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
