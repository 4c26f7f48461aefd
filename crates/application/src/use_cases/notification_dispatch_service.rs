use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use yourroute_config::{MailConfig, MailCredentials};
use yourroute_domain::entities::{AlertEmail, DispatchResult, IncidentBatch};
use yourroute_domain::ports::MailTransport;

/// 通知派发服务 - 把一批事件整理成一封告警邮件交给投递通道
///
/// 派发从不向调用方返回错误：凭据缺失时跳过，投递失败时记录日志，
/// 结果通过 [`DispatchResult`] 交给接口层决定如何响应。
pub struct NotificationDispatchService {
    transport: Arc<dyn MailTransport>,
    config: MailConfig,
}

impl NotificationDispatchService {
    pub fn new(transport: Arc<dyn MailTransport>, config: MailConfig) -> Self {
        Self { transport, config }
    }

    /// 为整批事件派发一封告警邮件
    pub async fn dispatch(&self, batch: &IncidentBatch) -> DispatchResult {
        let Some(credentials) = self.config.credentials() else {
            let missing = self.config.missing_fields();
            warn!(
                missing = ?missing,
                incidents = batch.len(),
                "邮件凭据未完整配置，跳过告警邮件"
            );
            return DispatchResult::SkippedMissingConfig { missing };
        };

        let email = compose_alert_email(batch, &credentials, &self.config.subject);
        let timeout = Duration::from_secs(self.config.send_timeout_seconds);

        match tokio::time::timeout(timeout, self.transport.send(&email)).await {
            Ok(Ok(())) => {
                info!(
                    recipient = %email.to,
                    incidents = batch.len(),
                    "告警邮件发送成功"
                );
                DispatchResult::Sent
            }
            Ok(Err(e)) => {
                error!(recipient = %email.to, error = %e, "告警邮件发送失败");
                DispatchResult::TransportFailed(e.to_string())
            }
            Err(_) => {
                error!(
                    recipient = %email.to,
                    timeout_seconds = self.config.send_timeout_seconds,
                    "告警邮件发送超时"
                );
                DispatchResult::TransportFailed(format!(
                    "发送超时 ({}s)",
                    self.config.send_timeout_seconds
                ))
            }
        }
    }
}

/// 按请求顺序拼接每条事件的类型、地点和时间
pub fn compose_alert_email(
    batch: &IncidentBatch,
    credentials: &MailCredentials,
    subject: &str,
) -> AlertEmail {
    let mut body = String::from("The following emergency data has been received:\n\n");
    for report in batch {
        // 写入 String 不会失败
        let _ = write!(
            body,
            "Type: {}\nLocation: {}\nTimestamp: {}\n\n",
            report.emergency_type, report.location, report.timestamp
        );
    }

    AlertEmail {
        from: credentials.sender_email.clone(),
        to: credentials.receiver_email.clone(),
        subject: subject.to_string(),
        body,
    }
}
