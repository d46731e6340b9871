use produto_api::infrastructure::{config::load_config, logger::Logger};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = load_config()?;
    Logger::init(config.log_level()?);

    match &config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let addr = config.socket_addr()?;
    let app = produto_api::build_app(&config);

    let listener = TcpListener::bind(addr).await?;

    info!("🚀 产品 REST API 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/produtos      - 列出所有产品");
    info!("   GET    /api/produtos/:id  - 获取特定产品");
    info!("   POST   /api/produtos      - 创建新产品");
    info!("   PUT    /api/produtos/:id  - 更新产品");
    info!("   DELETE /api/produtos/:id  - 删除产品");
    info!("   GET    /health            - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C 信号: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM 信号: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，正在关闭服务器...");
}
