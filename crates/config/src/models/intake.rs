use serde::{Deserialize, Serialize};

/// 事件上报入口的校验规则
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// 任一字段为空或只含空白时拒绝整批数据
    pub reject_blank_fields: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            reject_blank_fields: true,
        }
    }
}
