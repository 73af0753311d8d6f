use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Multiplication overflow: {a} * {b} does not fit in i64")]
    Overflow { a: i64, b: i64 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn overflow(a: i64, b: i64) -> Self {
        Self::Overflow { a, b }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
