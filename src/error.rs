use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodzError {
    #[error("task {0} not found")]
    TaskNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, TodzError>;
