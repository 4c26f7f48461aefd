pub mod auth;
pub mod messaging;
pub mod repositories;

pub use auth::*;
pub use messaging::*;
pub use repositories::*;
