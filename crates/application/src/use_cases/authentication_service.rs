use tracing::{info, warn};

use yourroute_domain::account::{LoginCredentials, NewAccount};
use yourroute_errors::{YourRouteError, YourRouteResult};

/// 占位登录令牌
pub const PLACEHOLDER_TOKEN: &str = "dummy-jwt-token";

/// 占位账号服务
///
/// 不做持久化，也不做密码哈希。注册总是成功；登录只拒绝字面值为 `wrong` 的密码。
#[derive(Debug, Default, Clone)]
pub struct AuthenticationService;

impl AuthenticationService {
    pub fn new() -> Self {
        Self
    }

    pub async fn register(&self, account: &NewAccount) -> YourRouteResult<()> {
        info!(
            user_type = %account.user_type,
            has_name = account.name.is_some(),
            has_company = account.company_name.is_some(),
            "收到注册请求"
        );
        Ok(())
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> YourRouteResult<String> {
        if credentials.password == "wrong" {
            warn!("登录失败: 凭据无效");
            return Err(YourRouteError::unauthorized("邮箱或密码错误"));
        }

        info!("登录成功");
        Ok(PLACEHOLDER_TOKEN.to_string())
    }
}
