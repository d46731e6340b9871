//! 应用层：路由装配

pub mod health;
pub mod produto;

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::{middleware::request_logging_middleware, response::ApiResponse};
use produto::handler::{
    create_produto, delete_produto, get_produto, list_produtos, update_produto, AppState,
};

/// 产品接口路由，不带任何中间件
pub fn produto_routes() -> Router<AppState> {
    Router::new()
        .route("/api/produtos", get(list_produtos).post(create_produto))
        .route(
            "/api/produtos/:id",
            get(get_produto).put(update_produto).delete(delete_produto),
        )
}

/// 完整的应用路由
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    produto_routes()
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("Recurso não encontrado")),
    )
}
