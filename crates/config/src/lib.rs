//! # Your Route 配置
//!
//! 配置按以下顺序合并，后者覆盖前者：
//!
//! 1. 内置默认值
//! 2. TOML 配置文件（`--config` 指定，或 `config/yourroute.toml`、`yourroute.toml`）
//! 3. `YOURROUTE_` 前缀的环境变量，层级分隔符为 `__`，例如 `YOURROUTE_MAIL__SMTP_PORT=587`
//! 4. 部署时沿用的扁平环境变量：`MONGO_DB_USER`、`MONGO_DB_PASSWORD`、`MONGO_DB_CLUSTER`、
//!    `MONGO_DB_NAME`、`MAPPLS_CLIENT_ID`、`MAPPLS_CLIENT_SECRET`、`SENDER_EMAIL`、
//!    `SENDER_EMAIL_PASSWORD`、`RECEIVER_EMAIL`
//!
//! 空白字符串的凭据视为未配置。

pub mod models;

pub use models::{
    AppConfig, DatabaseConfig, IntakeConfig, LogLevel, LoggingConfig, MailConfig, MailCredentials,
    MapplsConfig, OutputFormat, ServerConfig,
};

/// 扁平环境变量与配置键的映射
pub const LEGACY_ENV_KEYS: [(&str, &str); 9] = [
    ("MONGO_DB_USER", "database.user"),
    ("MONGO_DB_PASSWORD", "database.password"),
    ("MONGO_DB_CLUSTER", "database.cluster"),
    ("MONGO_DB_NAME", "database.name"),
    ("MAPPLS_CLIENT_ID", "mappls.client_id"),
    ("MAPPLS_CLIENT_SECRET", "mappls.client_secret"),
    ("SENDER_EMAIL", "mail.sender_email"),
    ("SENDER_EMAIL_PASSWORD", "mail.sender_password"),
    ("RECEIVER_EMAIL", "mail.receiver_email"),
];

/// 日志中替代敏感值的占位符
pub(crate) fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "***",
        None => "<unset>",
    }
}

/// 把空白字符串归一为 `None`，非空值原样保留
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
