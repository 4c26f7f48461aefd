pub mod mongo;
pub mod profile_repository;

pub use mongo::{DatabaseHandle, DatabaseStatus};
pub use profile_repository::{InMemoryProfileRepository, MongoProfileRepository};
