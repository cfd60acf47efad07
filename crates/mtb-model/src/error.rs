use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid year-month value: {0}")]
    InvalidYearMonth(String),
    #[error("invalid month: {0}")]
    InvalidMonth(u32),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
