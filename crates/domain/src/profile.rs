use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 账号类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    General,
    Corporate,
    Employee,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::General, UserType::Corporate, UserType::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::General => "general",
            UserType::Corporate => "corporate",
            UserType::Employee => "employee",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(UserType::General),
            "corporate" => Ok(UserType::Corporate),
            "employee" => Ok(UserType::Employee),
            _ => Err(format!("未知的用户类型: {s}")),
        }
    }
}

/// 用户资料文档，不同账号类型的字段不同，按 JSON 原样返回
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_type: UserType,
    pub document: serde_json::Value,
}
