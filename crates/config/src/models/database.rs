use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{non_blank, redact};

/// MongoDB 连接配置
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    pub cluster: Option<String>,
    pub name: Option<String>,
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: None,
            password: None,
            cluster: None,
            name: None,
            connect_timeout_seconds: 10,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &redact(&self.password))
            .field("cluster", &self.cluster)
            .field("name", &self.name)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl DatabaseConfig {
    pub(crate) fn normalize(&mut self) {
        self.user = non_blank(self.user.take());
        self.password = non_blank(self.password.take());
        self.cluster = non_blank(self.cluster.take());
        self.name = non_blank(self.name.take());
    }

    /// 四项齐全时拼出 `mongodb+srv` 连接串
    pub fn connection_uri(&self) -> Option<String> {
        let user = self.user.as_deref()?;
        let password = self.password.as_deref()?;
        let cluster = self.cluster.as_deref()?;
        let name = self.name.as_deref()?;

        Some(format!(
            "mongodb+srv://{user}:{password}@{cluster}/?retryWrites=true&w=majority&appName={name}"
        ))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.connect_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("数据库连接超时时间必须大于0"));
        }

        Ok(())
    }
}
