use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid redaction mode: {0} (expected one of: values, keys, both)")]
    InvalidMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
