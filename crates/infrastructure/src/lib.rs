pub mod database;
pub mod mail;
pub mod mappls;

pub use database::*;
pub use mail::*;
pub use mappls::*;
