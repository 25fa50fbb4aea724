pub mod envelope;
pub mod error;
pub mod extractors;
pub mod projects;
