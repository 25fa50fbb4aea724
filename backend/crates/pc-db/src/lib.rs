pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{MIGRATOR, PoolSettings, connect, connect_in_memory, migrate};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
