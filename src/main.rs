use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yourroute_config::{AppConfig, LogLevel, OutputFormat};

mod app;
mod shutdown;

use app::Application;

/// Your Route 紧急告警后端
#[derive(Debug, Parser)]
#[command(name = "yourroute", version, about = "Your Route 紧急告警后端")]
struct Cli {
    /// 配置文件路径，缺省时依次查找 config/yourroute.toml 和 yourroute.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// 日志级别，覆盖配置文件
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// 日志格式，覆盖配置文件
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<OutputFormat>,

    /// 监听地址，覆盖配置文件
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).with_context(|| {
        format!(
            "加载配置失败: {}",
            cli.config.as_deref().unwrap_or("默认路径")
        )
    })?;

    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    let log_level = cli.log_level.unwrap_or(config.logging.level);
    let log_format = cli.log_format.unwrap_or(config.logging.format);
    init_logging(log_level, log_format)?;

    info!("启动 Your Route 紧急告警后端");
    info!(config = ?config, "配置加载完成");

    let app = Application::new(config).await?;
    app.run().await?;

    info!("Your Route 紧急告警后端已退出");
    Ok(())
}

/// 初始化日志系统，RUST_LOG 优先于配置的级别
fn init_logging(log_level: LogLevel, log_format: OutputFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        OutputFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("初始化JSON日志格式失败")?;
        }
        OutputFormat::Text => {
            registry
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .context("初始化文本日志格式失败")?;
        }
        OutputFormat::Pretty => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("初始化Pretty日志格式失败")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "yourroute",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--bind",
            "0.0.0.0:9000",
        ]);

        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(OutputFormat::Json));
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:9000"));
    }

    #[test]
    fn test_cli_defaults_to_config() {
        let cli = Cli::parse_from(["yourroute"]);
        assert!(cli.config.is_none());
        assert!(cli.log_level.is_none());
        assert!(cli.bind.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["yourroute", "--log-format", "xml"]).is_err());
    }
}
