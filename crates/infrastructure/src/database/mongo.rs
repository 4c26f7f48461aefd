use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{info, warn};

use yourroute_config::DatabaseConfig;
use yourroute_errors::{YourRouteError, YourRouteResult};

/// 启动时数据库探测的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connected,
    /// 未配置或连接失败，服务以无持久化模式运行
    Degraded,
}

impl DatabaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseStatus::Connected => "connected",
            DatabaseStatus::Degraded => "degraded",
        }
    }
}

/// MongoDB 句柄，探测失败时为空
#[derive(Clone, Default)]
pub struct DatabaseHandle {
    database: Option<Database>,
}

impl DatabaseHandle {
    pub fn degraded() -> Self {
        Self { database: None }
    }

    /// 连接并 ping 一次，任何失败都降级而不是中止启动
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let (Some(uri), Some(name)) = (config.connection_uri(), config.name.clone()) else {
            warn!("MongoDB 未完整配置，以降级模式运行");
            return Self::degraded();
        };

        let timeout = Duration::from_secs(config.connect_timeout_seconds);
        match Self::probe(&uri, &name, timeout).await {
            Ok(database) => {
                info!(database = %name, "MongoDB 连接成功");
                Self {
                    database: Some(database),
                }
            }
            Err(e) => {
                warn!(error = %e, "MongoDB 连接失败，以降级模式运行");
                Self::degraded()
            }
        }
    }

    async fn probe(uri: &str, name: &str, timeout: Duration) -> YourRouteResult<Database> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| YourRouteError::Database(format!("连接串解析失败: {e}")))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some(name.to_string());

        let client = Client::with_options(options)
            .map_err(|e| YourRouteError::Database(format!("创建客户端失败: {e}")))?;
        let database = client.database(name);

        let ping = async { database.run_command(doc! { "ping": 1 }).await };
        tokio::time::timeout(timeout, ping)
            .await
            .map_err(|_| YourRouteError::Timeout(format!("MongoDB ping 超时 ({}s)", timeout.as_secs())))?
            .map_err(|e| YourRouteError::Database(format!("MongoDB ping 失败: {e}")))?;

        Ok(database)
    }

    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    pub fn status(&self) -> DatabaseStatus {
        if self.database.is_some() {
            DatabaseStatus::Connected
        } else {
            DatabaseStatus::Degraded
        }
    }
}
