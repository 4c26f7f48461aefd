use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{non_blank, redact};

/// Mappls 地图平台 OAuth 配置
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapplsConfig {
    pub token_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for MapplsConfig {
    fn default() -> Self {
        Self {
            token_url: "https://outpost.mappls.com/api/security/oauth/token".to_string(),
            client_id: None,
            client_secret: None,
            timeout_seconds: 10,
        }
    }
}

impl fmt::Debug for MapplsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapplsConfig")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl MapplsConfig {
    pub(crate) fn normalize(&mut self) {
        self.client_id = non_blank(self.client_id.take());
        self.client_secret = non_blank(self.client_secret.take());
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.token_url.starts_with("https://") && !self.token_url.starts_with("http://") {
            return Err(anyhow::anyhow!("Mappls令牌地址必须是HTTP(S) URL"));
        }

        if self.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("Mappls请求超时时间必须大于0"));
        }

        Ok(())
    }
}
