//! 告警派发、账号占位服务与第三方令牌缓存等应用层服务

pub mod services;
pub mod use_cases;

pub use services::TokenCache;
pub use use_cases::{AlertRelayService, AuthenticationService, NotificationDispatchService};
