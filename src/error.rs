use thiserror::Error;

#[derive(Error, Debug)]
pub enum BureauError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Unknown vocabulary: {0}")]
    UnknownVocabulary(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BureauError>;
