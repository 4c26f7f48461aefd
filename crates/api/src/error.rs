use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use yourroute_errors::YourRouteError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] YourRouteError),

    #[error("请求体解析失败: {0}")]
    Json(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Json(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Json(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Service(e) => match e {
                YourRouteError::MalformedInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
                YourRouteError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                YourRouteError::NotFound(_) => StatusCode::NOT_FOUND,
                YourRouteError::UpstreamAuth(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error_message, error_type, suggestions) = match &self {
            ApiError::Json(rejection) => (
                format!("请求数据格式错误: {}", rejection.body_text()),
                "MALFORMED_INPUT",
                vec![
                    "请检查JSON格式是否正确".to_string(),
                    "确保Content-Type为application/json且所有必需字段都已提供".to_string(),
                ],
            ),
            ApiError::Service(YourRouteError::MalformedInput(msg)) => (
                format!("请求数据格式错误: {msg}"),
                "MALFORMED_INPUT",
                vec!["请检查每条记录的字段是否完整且不为空".to_string()],
            ),
            ApiError::Service(YourRouteError::Unauthorized(msg)) => {
                (msg.clone(), "UNAUTHORIZED", vec!["请检查邮箱和密码".to_string()])
            }
            ApiError::Service(YourRouteError::NotFound(msg)) => (
                msg.clone(),
                "NOT_FOUND",
                vec!["user_type 可选值: general, corporate, employee".to_string()],
            ),
            ApiError::Service(e @ YourRouteError::UpstreamAuth(msg)) => (
                e.user_message().to_string(),
                "UPSTREAM_AUTH_ERROR",
                vec![
                    "请检查第三方平台的客户端凭据配置".to_string(),
                    format!("错误详情: {msg}"),
                ],
            ),
            ApiError::Service(other) => (
                other.user_message().to_string(),
                "INTERNAL_ERROR",
                vec![
                    "系统遇到内部错误，请稍后重试".to_string(),
                    "查看 GET /health 检查系统状态".to_string(),
                    format!("错误详情: {other}"),
                ],
            ),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "请求处理失败");
        }

        let body = Json(json!({
            "success": false,
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "suggestions": suggestions,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
