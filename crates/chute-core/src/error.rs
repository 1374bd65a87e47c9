use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChuteError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid update mode: {0}")]
    InvalidMode(String),

    #[error("Invalid curve: {0}")]
    InvalidCurve(String),

    #[error("Numeric error: {0}")]
    Numeric(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChuteError>;
