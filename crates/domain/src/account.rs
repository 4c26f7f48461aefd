use serde::Deserialize;

/// 注册请求中的账号信息
///
/// `user_type` 按原样保存，不限定取值。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub user_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// 登录凭据
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}
