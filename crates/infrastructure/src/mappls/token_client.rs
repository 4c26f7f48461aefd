use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use yourroute_config::MapplsConfig;
use yourroute_domain::ports::TokenExchange;
use yourroute_errors::{YourRouteError, YourRouteResult};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Mappls OAuth 客户端凭据换取令牌
pub struct MapplsTokenClient {
    token_url: String,
    client_id: String,
    client_secret: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl MapplsTokenClient {
    /// 客户端 ID 和密钥都已配置时创建
    pub fn from_config(config: &MapplsConfig) -> Option<Self> {
        Some(Self {
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone()?,
            client_secret: config.client_secret.clone()?,
            timeout: Duration::from_secs(config.timeout_seconds),
            http_client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl TokenExchange for MapplsTokenClient {
    async fn exchange(&self) -> YourRouteResult<String> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!("Mappls令牌请求失败: {}", e);
                if e.is_timeout() {
                    YourRouteError::upstream_auth(format!("Mappls令牌请求超时: {e}"))
                } else {
                    YourRouteError::upstream_auth(format!("Mappls令牌请求失败: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Mappls令牌换取被拒绝: HTTP {} - {}", status, body);
            return Err(YourRouteError::upstream_auth(format!(
                "令牌换取失败: HTTP {status}"
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            YourRouteError::upstream_auth(format!("令牌响应格式无效: {e}"))
        })?;

        debug!(
            token_type = ?token.token_type,
            expires_in = ?token.expires_in,
            "Mappls令牌换取成功"
        );

        Ok(token.access_token)
    }
}
