use thiserror::Error;

#[derive(Debug, Error)]
pub enum YourRouteError {
    #[error("请求数据格式错误: {0}")]
    MalformedInput(String),
    #[error("上游认证失败: {0}")]
    UpstreamAuth(String),
    #[error("内部错误: {0}")]
    Internal(String),
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("网络错误: {0}")]
    Network(String),
    #[error("操作超时: {0}")]
    Timeout(String),
    #[error("资源未找到: {0}")]
    NotFound(String),
    #[error("认证失败: {0}")]
    Unauthorized(String),
    #[error("数据库错误: {0}")]
    Database(String),
}

pub type YourRouteResult<T> = Result<T, YourRouteError>;

impl YourRouteError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedInput(msg.into())
    }
    pub fn upstream_auth<S: Into<String>>(msg: S) -> Self {
        Self::UpstreamAuth(msg.into())
    }
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
    pub fn unauthorized<S: Into<String>>(msg: S) -> Self {
        Self::Unauthorized(msg.into())
    }
    /// 返回给调用方的概括性说明，不含内部细节
    pub fn user_message(&self) -> &'static str {
        match self {
            YourRouteError::MalformedInput(_) => "请求数据验证失败",
            YourRouteError::NotFound(_) => "请求的资源不存在",
            YourRouteError::Unauthorized(_) => "认证失败",
            YourRouteError::UpstreamAuth(_) => "第三方服务认证失败",
            YourRouteError::Timeout(_) => "操作超时，请稍后重试",
            _ => "系统繁忙，请稍后重试",
        }
    }
}

#[cfg(test)]
mod tests;
