use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use yourroute_config::MailConfig;
use yourroute_domain::entities::AlertEmail;
use yourroute_domain::ports::MailTransport;
use yourroute_errors::{YourRouteError, YourRouteResult};

/// 隐式 TLS 的 SMTP 端口
const SMTPS_PORT: u16 = 465;

/// 基于 lettre 的异步 SMTP 投递通道
///
/// 465 端口走隐式 TLS，其他端口走 STARTTLS。网络 I/O 在 tokio 上异步完成，不阻塞请求线程。
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    pub fn from_config(config: &MailConfig) -> YourRouteResult<Self> {
        let builder = if config.smtp_port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        }
        .map_err(|e| YourRouteError::config_error(format!("SMTP中继配置无效: {e}")))?;

        let mut builder = builder
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.send_timeout_seconds)));

        if let (Some(user), Some(password)) = (&config.sender_email, &config.sender_password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        debug!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP投递通道已创建"
        );

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

/// 把告警邮件转换为 lettre 的纯文本消息
pub fn build_message(email: &AlertEmail) -> YourRouteResult<Message> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| YourRouteError::config_error(format!("发件人地址无效: {e}")))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| YourRouteError::config_error(format!("收件人地址无效: {e}")))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| YourRouteError::internal(format!("构建邮件失败: {e}")))
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: &AlertEmail) -> YourRouteResult<()> {
        let message = build_message(email)?;

        self.mailer.send(message).await.map_err(|e| {
            if e.is_timeout() {
                YourRouteError::Timeout(format!("SMTP发送超时: {e}"))
            } else {
                YourRouteError::Network(format!("SMTP发送失败: {e}"))
            }
        })?;

        Ok(())
    }
}
