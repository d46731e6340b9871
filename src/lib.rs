//! # 产品 REST API
//!
//! 一个基于 Axum 的最小 REST 服务，只提供一个资源：产品 (Produto)。
//! - 应用层 (`app`)：路由、处理器、产品服务和内存存储
//! - 核心层 (`core`)：统一响应信封、错误类型、中间件、服务抽象
//! - 基础设施层 (`infrastructure`)：配置文件和日志
//!
//! 数据只保存在内存中，进程重启后恢复为示例数据。

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::Router;

use crate::app::produto::{handler::AppState, service::ProdutoService};
use crate::infrastructure::config::Config;

/// 根据配置构建产品服务和完整路由
pub fn build_app(config: &Config) -> Router {
    let produto_service = if config.storage.seed_sample_data {
        ProdutoService::new()
    } else {
        ProdutoService::empty()
    };

    app::router(AppState::new(produto_service), config.request_timeout())
}
