pub mod account;
pub mod entities;
pub mod ports;
pub mod profile;
pub mod validation;

pub use account::*;
pub use entities::*;
pub use ports::*;
pub use profile::*;
pub use yourroute_errors::{YourRouteError, YourRouteResult};
