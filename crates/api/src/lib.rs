//! # YourRoute API
//!
//! 紧急告警后端的HTTP接口层，基于Axum构建。
//!
//! ## API 端点
//!
//! - `GET /health` - 健康检查，附带数据库和第三方令牌状态
//! - `POST /emergency_alert` - 接收事件批次并派发告警邮件
//! - `POST /internal_data_receiver` - 内部转交接口，与上一个接口共用处理逻辑
//! - `POST /signup` - 注册占位接口
//! - `POST /login` - 登录占位接口
//! - `GET /profile?user_type=general|corporate|employee` - 查询演示资料
//!
//! ## 错误响应
//!
//! 所有错误使用统一格式：
//!
//! ```json
//! {
//!   "success": false,
//!   "error": {
//!     "message": "请求数据格式错误: ...",
//!     "type": "MALFORMED_INPUT",
//!     "code": 422,
//!     "suggestions": ["请检查JSON格式是否正确"],
//!     "timestamp": "2025-01-01T00:00:00Z"
//!   }
//! }
//! ```
//!
//! 请求体解析失败返回 422，登录失败返回 401，资料不存在返回 404，
//! 第三方认证失败返回 502，其余错误返回 500。

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::Router;
use tower::ServiceBuilder;

use middleware::{body_limit_layer, cors_layer, request_logging, timeout_layer, trace_layer};
use routes::create_routes;
use yourroute_config::ServerConfig;

pub use routes::AppState;

/// 创建完整的API应用
pub fn create_app(state: AppState, server_config: &ServerConfig) -> Router {
    create_routes(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(cors_layer(&server_config.cors_origins))
            .layer(axum::middleware::from_fn(request_logging))
            .layer(body_limit_layer(server_config))
            .layer(timeout_layer(server_config)),
    )
}
