//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use super::response::ApiResponse;

/// 产品不存在时的业务错误码
pub const PRODUTO_NAO_ENCONTRADO: &str = "PRODUTO_NAO_ENCONTRADO";

/// 核心错误类型
///
/// 业务层只会产生 `NotFound`，其余失败由框架提取器自行拒绝。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{message}")]
    NotFound { code: String, message: String },
}

impl CoreError {
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 按 ID 查找产品失败
    pub fn produto_not_found(id: i64) -> Self {
        Self::not_found(
            PRODUTO_NAO_ENCONTRADO,
            format!("Produto com ID {} não encontrado", id),
        )
    }

    /// 机器可读的错误码
    pub fn code(&self) -> &str {
        match self {
            CoreError::NotFound { code, .. } => code,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(code = self.code(), status = status.as_u16(), "{}", self);

        let body: ApiResponse<()> = ApiResponse::error(self.to_string());
        (status, Json(body)).into_response()
    }
}
