use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, CompareError>;

// 用于从字符串创建错误
impl From<String> for CompareError {
    fn from(s: String) -> Self {
        CompareError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for CompareError {
    fn from(s: &str) -> Self {
        CompareError::Unknown(s.to_string())
    }
}
