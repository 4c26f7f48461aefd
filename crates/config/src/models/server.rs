use serde::{Deserialize, Serialize};

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub request_timeout_seconds: u64,
    pub max_request_size_kb: usize,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            request_timeout_seconds: 30,
            max_request_size_kb: 256,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(anyhow::anyhow!("监听地址不能为空"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("请求超时时间必须大于0"));
        }

        if self.max_request_size_kb == 0 {
            return Err(anyhow::anyhow!("请求体大小上限必须大于0"));
        }

        Ok(())
    }
}
