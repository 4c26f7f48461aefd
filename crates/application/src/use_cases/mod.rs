pub mod alert_relay_service;
pub mod authentication_service;
pub mod notification_dispatch_service;

pub use alert_relay_service::AlertRelayService;
pub use authentication_service::AuthenticationService;
pub use notification_dispatch_service::NotificationDispatchService;
