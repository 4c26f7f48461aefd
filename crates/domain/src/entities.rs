use serde::{Deserialize, Serialize};

/// 单条事件上报：类型、地点、发生时间
///
/// 三个字段都必须出现在请求体中；时间戳按客户端原样保存，不做解析。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub emergency_type: String,
    pub location: String,
    pub timestamp: String,
}

impl IncidentReport {
    pub fn new(
        emergency_type: impl Into<String>,
        location: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            emergency_type: emergency_type.into(),
            location: location.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// 一次请求携带的事件批次，保持请求中的顺序，允许为空和重复
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentBatch(Vec<IncidentReport>);

impl IncidentBatch {
    pub fn new(reports: Vec<IncidentReport>) -> Self {
        Self(reports)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IncidentReport> {
        self.0.iter()
    }

    pub fn reports(&self) -> &[IncidentReport] {
        &self.0
    }
}

impl From<Vec<IncidentReport>> for IncidentBatch {
    fn from(reports: Vec<IncidentReport>) -> Self {
        Self(reports)
    }
}

impl<'a> IntoIterator for &'a IncidentBatch {
    type Item = &'a IncidentReport;
    type IntoIter = std::slice::Iter<'a, IncidentReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 待发送的纯文本告警邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// 一次告警派发的结果
///
/// 接口层根据它决定是照常返回成功还是报错，派发本身从不抛出错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Sent,
    SkippedMissingConfig { missing: Vec<&'static str> },
    TransportFailed(String),
}

impl DispatchResult {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchResult::Sent)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DispatchResult::Sent => "sent",
            DispatchResult::SkippedMissingConfig { .. } => "skipped_missing_config",
            DispatchResult::TransportFailed(_) => "transport_failed",
        }
    }
}
