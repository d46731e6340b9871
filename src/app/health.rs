//! 健康检查

use axum::{extract::State, response::Json};

use super::produto::handler::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "storage": {
            "type": "in-memory",
            "produtos_count": state.produto_service.count()
        }
    }))
}
