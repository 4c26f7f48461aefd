use async_trait::async_trait;
use yourroute_errors::YourRouteResult;

use crate::entities::AlertEmail;

/// 邮件投递通道（生产环境为 SMTP 中继）
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &AlertEmail) -> YourRouteResult<()>;
}
