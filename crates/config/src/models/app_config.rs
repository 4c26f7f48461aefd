use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    database::DatabaseConfig, intake::IntakeConfig, logging::LoggingConfig, mail::MailConfig,
    mappls::MapplsConfig, server::ServerConfig,
};
use crate::LEGACY_ENV_KEYS;

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/yourroute.toml", "yourroute.toml"];

/// System configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub mappls: MapplsConfig,
    pub database: DatabaseConfig,
    pub intake: IntakeConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from config file and the process environment
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file path, if None try the default paths
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_from(config_path, std::env::vars().collect())
    }

    /// Load configuration with an explicit environment snapshot
    pub fn load_from(config_path: Option<&str>, env: HashMap<String, String>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        // 1. 配置文件
        if let Some(path) = config_path {
            if !Path::new(path).exists() {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            debug!("使用默认配置文件: {path}");
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        // 2. YOURROUTE_ 前缀环境变量
        let prefixed: config::Map<String, String> = env
            .iter()
            .filter(|(key, _)| key.starts_with("YOURROUTE_"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        builder = builder.add_source(
            Environment::with_prefix("YOURROUTE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(prefixed)),
        );

        // 3. 扁平环境变量，优先级最高；空白值视为未设置
        for (env_key, config_key) in LEGACY_ENV_KEYS {
            let value = env.get(env_key).filter(|v| !v.trim().is_empty()).cloned();
            builder = builder.set_override_option(config_key, value)?;
        }

        let mut config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        self.mail.normalize();
        self.mappls.normalize();
        self.database.normalize();
    }

    /// Validate configuration effectiveness
    pub fn validate(&self) -> Result<()> {
        self.server.validate().context("服务配置验证失败")?;
        self.mail.validate().context("邮件配置验证失败")?;
        self.mappls.validate().context("Mappls配置验证失败")?;
        self.database.validate().context("数据库配置验证失败")?;

        Ok(())
    }
}
