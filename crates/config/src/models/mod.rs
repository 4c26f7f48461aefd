pub mod app_config;
pub mod database;
pub mod intake;
pub mod logging;
pub mod mail;
pub mod mappls;
pub mod server;

pub use app_config::*;
pub use database::*;
pub use intake::*;
pub use logging::*;
pub use mail::*;
pub use mappls::*;
pub use server::*;
