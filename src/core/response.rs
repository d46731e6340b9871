//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// API 统一响应结构
///
/// 成功和失败都使用同一个信封，`message` 与 `data` 为空时序列化为 `null`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 只携带数据的成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// 携带提示信息的成功响应，`data` 可以为空（例如删除操作）
    pub fn success_with_message(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let value = serde_json::to_value(ApiResponse::success(5)).unwrap();
        assert_eq!(value, json!({ "success": true, "message": null, "data": 5 }));
    }

    #[test]
    fn test_error_envelope() {
        let value = serde_json::to_value(ApiResponse::<()>::error("falhou")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "message": "falhou", "data": null })
        );
    }

    #[test]
    fn test_success_without_data() {
        let response = ApiResponse::<()>::success_with_message("ok", None);
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("ok"));
        assert!(response.data.is_none());
    }
}
