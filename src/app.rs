use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use yourroute_api::{create_app, AppState};
use yourroute_application::{
    AlertRelayService, AuthenticationService, NotificationDispatchService, TokenCache,
};
use yourroute_config::AppConfig;
use yourroute_domain::ports::ProfileRepository;
use yourroute_infrastructure::{
    DatabaseHandle, InMemoryProfileRepository, MapplsTokenClient, MongoProfileRepository,
    SmtpMailTransport,
};

use crate::shutdown::shutdown_signal;

/// 主应用程序
pub struct Application {
    config: AppConfig,
    state: AppState,
}

impl Application {
    /// 装配所有组件；数据库和第三方平台不可用时降级运行
    pub async fn new(config: AppConfig) -> Result<Self> {
        let transport = SmtpMailTransport::from_config(&config.mail).context("创建SMTP投递通道失败")?;
        let dispatcher = Arc::new(NotificationDispatchService::new(
            Arc::new(transport),
            config.mail.clone(),
        ));
        let relay = Arc::new(AlertRelayService::new(
            dispatcher,
            config.intake.reject_blank_fields,
            config.mail.strict_delivery,
        ));

        let database = DatabaseHandle::connect(&config.database).await;
        let fallback: Arc<dyn ProfileRepository> =
            Arc::new(InMemoryProfileRepository::with_default_profiles());
        let profiles: Arc<dyn ProfileRepository> = match database.database() {
            Some(db) => Arc::new(MongoProfileRepository::new(db).with_fallback(fallback)),
            None => fallback,
        };

        let token_cache = match MapplsTokenClient::from_config(&config.mappls) {
            Some(client) => {
                let cache = Arc::new(TokenCache::new(Arc::new(client)));
                warm_token_cache(Arc::clone(&cache));
                Some(cache)
            }
            None => {
                warn!("Mappls 客户端凭据未配置，跳过令牌换取");
                None
            }
        };

        let state = AppState {
            relay,
            auth: Arc::new(AuthenticationService::new()),
            profiles,
            token_cache,
            database_status: database.status(),
        };

        Ok(Self { config, state })
    }

    /// 启动HTTP服务直到收到关闭信号
    pub async fn run(self) -> Result<()> {
        let bind_address = self.config.server.bind_address.clone();
        let app = create_app(self.state, &self.config.server);

        let listener = TcpListener::bind(&bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {bind_address}"))?;
        info!("HTTP服务监听于 {bind_address}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP服务运行失败")?;

        info!("HTTP服务已优雅关闭");
        Ok(())
    }
}

/// 后台预取令牌，失败只记录日志，首次使用时会再次尝试
fn warm_token_cache(cache: Arc<TokenCache>) {
    tokio::spawn(async move {
        if let Err(e) = cache.get_or_fetch().await {
            warn!(error = %e, "Mappls 令牌预取失败");
        }
    });
}
