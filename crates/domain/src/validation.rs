use std::borrow::Cow;

use validator::ValidationError;
use yourroute_errors::{YourRouteError, YourRouteResult};

use crate::entities::{IncidentBatch, IncidentReport};

/// 字段不能为空或只含空白
pub fn validate_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from(format!("字段 {field} 不能为空")));
        return Err(error);
    }

    Ok(())
}

/// 单条上报的字段检查
pub fn validate_report(report: &IncidentReport) -> Result<(), ValidationError> {
    validate_not_blank("emergency_type", &report.emergency_type)?;
    validate_not_blank("location", &report.location)?;
    validate_not_blank("timestamp", &report.timestamp)?;
    Ok(())
}

impl IncidentBatch {
    /// 校验整批数据，任一条失败则整批拒绝
    ///
    /// `reject_blank_fields` 为 false 时只依赖反序列化阶段的字段存在性检查。
    pub fn validate(&self, reject_blank_fields: bool) -> YourRouteResult<()> {
        if !reject_blank_fields {
            return Ok(());
        }

        for (index, report) in self.iter().enumerate() {
            if let Err(error) = validate_report(report) {
                let detail = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                return Err(YourRouteError::malformed(format!("第 {index} 条记录: {detail}")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("location", "Block A").is_ok());
        assert!(validate_not_blank("location", "").is_err());
        assert!(validate_not_blank("location", "   \t").is_err());
    }

    #[test]
    fn test_batch_with_blank_field_rejected() {
        let batch = IncidentBatch::new(vec![
            IncidentReport::new("fire", "Block A", "2025-01-01T00:00:00Z"),
            IncidentReport::new("flood", " ", "2025-01-01T00:00:00Z"),
        ]);

        let error = batch.validate(true).unwrap_err();
        match error {
            YourRouteError::MalformedInput(msg) => {
                assert!(msg.contains("第 1 条记录"));
                assert!(msg.contains("location"));
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_permissive_mode_accepts_blank_fields() {
        let batch = IncidentBatch::new(vec![IncidentReport::new("", "", "")]);
        assert!(batch.validate(false).is_ok());
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(IncidentBatch::default().validate(true).is_ok());
    }
}
