use async_trait::async_trait;
use yourroute_errors::YourRouteResult;

/// 第三方平台的凭据换取令牌调用
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// 用客户端凭据换取 bearer 令牌，非成功状态返回 `UpstreamAuth`
    async fn exchange(&self) -> YourRouteResult<String>;
}
