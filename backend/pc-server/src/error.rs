use thiserror::Error;

/// Startup failures. Any of these aborts the process before serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pc_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pc_db::DbError),

    #[error("{message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
