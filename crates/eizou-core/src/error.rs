use thiserror::Error;

#[derive(Debug, Error)]
pub enum EizouError {
    #[error("config error: {0}")]
    Config(String),

    #[error("scan failed: {0}")]
    Scan(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
