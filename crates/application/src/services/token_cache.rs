use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info};

use yourroute_domain::ports::TokenExchange;
use yourroute_errors::YourRouteResult;

/// 第三方平台 bearer 令牌缓存
///
/// 首次调用时换取令牌并在进程生命周期内复用。并发的首次调用只会触发一次换取，
/// 换取失败不写入缓存，下一次调用会重新尝试。令牌没有过期刷新。
pub struct TokenCache {
    exchange: Arc<dyn TokenExchange>,
    slot: OnceCell<String>,
}

impl TokenCache {
    pub fn new(exchange: Arc<dyn TokenExchange>) -> Self {
        Self {
            exchange,
            slot: OnceCell::new(),
        }
    }

    /// 返回缓存的令牌，没有时换取一次
    pub async fn get_or_fetch(&self) -> YourRouteResult<String> {
        let token = self
            .slot
            .get_or_try_init(|| async {
                debug!("令牌缓存为空，开始换取令牌");
                let token = self.exchange.exchange().await?;
                info!("第三方平台令牌已缓存");
                Ok::<_, yourroute_errors::YourRouteError>(token)
            })
            .await?;

        Ok(token.clone())
    }

    pub fn is_cached(&self) -> bool {
        self.slot.initialized()
    }
}
