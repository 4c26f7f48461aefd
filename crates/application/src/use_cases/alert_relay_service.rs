use std::sync::Arc;

use tracing::{info, warn};

use yourroute_domain::entities::{DispatchResult, IncidentBatch};
use yourroute_errors::{YourRouteError, YourRouteResult};

use crate::use_cases::notification_dispatch_service::NotificationDispatchService;

/// 告警转发服务 - `/emergency_alert` 与 `/internal_data_receiver` 共用的处理逻辑
///
/// 校验整批数据后派发一次告警。`strict_delivery` 关闭时无论派发结果如何都算成功。
pub struct AlertRelayService {
    dispatcher: Arc<NotificationDispatchService>,
    reject_blank_fields: bool,
    strict_delivery: bool,
}

impl AlertRelayService {
    pub fn new(
        dispatcher: Arc<NotificationDispatchService>,
        reject_blank_fields: bool,
        strict_delivery: bool,
    ) -> Self {
        Self {
            dispatcher,
            reject_blank_fields,
            strict_delivery,
        }
    }

    pub async fn forward(&self, batch: &IncidentBatch) -> YourRouteResult<DispatchResult> {
        batch.validate(self.reject_blank_fields)?;

        info!(incidents = batch.len(), "接收到紧急事件数据，开始派发告警");
        let result = self.dispatcher.dispatch(batch).await;

        let failure = match &result {
            DispatchResult::Sent => return Ok(DispatchResult::Sent),
            DispatchResult::SkippedMissingConfig { missing } => {
                format!("告警邮件未发送，缺少配置: {}", missing.join(", "))
            }
            DispatchResult::TransportFailed(reason) => format!("告警邮件发送失败: {reason}"),
        };

        if self.strict_delivery {
            return Err(YourRouteError::internal(failure));
        }

        warn!(outcome = result.label(), reason = %failure, "告警邮件未送达，按宽松策略返回成功");
        Ok(result)
    }
}
