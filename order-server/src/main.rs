use order_server::core::server::BoxError;
use order_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. 加载 .env
    let _ = dotenvy::dotenv();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 日志
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        "Smartket order server starting (env: {}, port: {})",
        config.environment,
        config.http_port
    );

    // 4. 初始化服务器状态 (数据库 + 迁移)
    let state = ServerState::initialize(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize server state: {}", e);
        e
    })?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
