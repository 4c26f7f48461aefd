use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use yourroute_application::{AlertRelayService, AuthenticationService, TokenCache};
use yourroute_domain::ports::ProfileRepository;
use yourroute_infrastructure::DatabaseStatus;

use crate::handlers::{
    alerts::{emergency_alert, internal_data_receiver},
    auth::{login, signup},
    health::health_check,
    profile::get_profile,
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<AlertRelayService>,
    pub auth: Arc<AuthenticationService>,
    pub profiles: Arc<dyn ProfileRepository>,
    /// 未配置第三方平台凭据时为空
    pub token_cache: Option<Arc<TokenCache>>,
    pub database_status: DatabaseStatus,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 告警接收与内部转交
        .route("/emergency_alert", post(emergency_alert))
        .route("/internal_data_receiver", post(internal_data_receiver))
        // 账号占位接口
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/profile", get(get_profile))
        .with_state(state)
}
