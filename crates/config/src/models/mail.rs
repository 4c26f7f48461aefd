use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{non_blank, redact};

pub const DEFAULT_ALERT_SUBJECT: &str = "EMERGENCY ALERT: New Incident Reported";

/// 告警邮件配置
///
/// 三个凭据（发件人、发件密码、收件人）缺任意一个时，告警邮件被跳过而不是报错，
/// 除非打开 `strict_delivery`。
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub receiver_email: Option<String>,
    pub subject: String,
    pub send_timeout_seconds: u64,
    /// 投递失败或凭据缺失时是否让告警接口返回错误
    pub strict_delivery: bool,
}

/// 三项凭据齐全时的发件身份
#[derive(Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub sender_email: String,
    pub sender_password: String,
    pub receiver_email: String,
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"***")
            .field("receiver_email", &self.receiver_email)
            .finish()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
            sender_email: None,
            sender_password: None,
            receiver_email: None,
            subject: DEFAULT_ALERT_SUBJECT.to_string(),
            send_timeout_seconds: 15,
            strict_delivery: false,
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("sender_email", &self.sender_email)
            .field("sender_password", &redact(&self.sender_password))
            .field("receiver_email", &self.receiver_email)
            .field("subject", &self.subject)
            .field("send_timeout_seconds", &self.send_timeout_seconds)
            .field("strict_delivery", &self.strict_delivery)
            .finish()
    }
}

impl MailConfig {
    pub(crate) fn normalize(&mut self) {
        self.sender_email = non_blank(self.sender_email.take());
        self.sender_password = non_blank(self.sender_password.take());
        self.receiver_email = non_blank(self.receiver_email.take());
    }

    /// 凭据齐全时返回发件身份
    pub fn credentials(&self) -> Option<MailCredentials> {
        Some(MailCredentials {
            sender_email: self.sender_email.clone()?,
            sender_password: self.sender_password.clone()?,
            receiver_email: self.receiver_email.clone()?,
        })
    }

    /// 未配置的凭据名称，用于日志提示
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.sender_email.is_none() {
            missing.push("SENDER_EMAIL");
        }
        if self.sender_password.is_none() {
            missing.push("SENDER_EMAIL_PASSWORD");
        }
        if self.receiver_email.is_none() {
            missing.push("RECEIVER_EMAIL");
        }
        missing
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.smtp_host.trim().is_empty() {
            return Err(anyhow::anyhow!("SMTP主机不能为空"));
        }

        if self.smtp_port == 0 {
            return Err(anyhow::anyhow!("SMTP端口必须大于0"));
        }

        if self.send_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("邮件发送超时时间必须大于0"));
        }

        Ok(())
    }
}
