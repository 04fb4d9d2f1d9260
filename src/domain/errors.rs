use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rejected input at the series ingestion boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NegativeValue { index: usize, value: f64 },
    NonFiniteValue { index: usize },
    UnorderedTimestamps { index: usize, previous: i64, actual: i64 },
    InvalidTimestamp(String),
}

/// Root error type for the crate. The interaction core never produces one.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Validation(ValidationError),
    Parse(String),
    Browser(String),
    Configuration(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::NegativeValue { index, value } => {
                write!(f, "point {} has negative value {}", index, value)
            }
            ValidationError::NonFiniteValue { index } => {
                write!(f, "point {} has a non-finite value", index)
            }
            ValidationError::UnorderedTimestamps { index, previous, actual } => write!(
                f,
                "point {} has timestamp {} before preceding timestamp {}",
                index, actual, previous
            ),
            ValidationError::InvalidTimestamp(raw) => write!(f, "invalid timestamp: {}", raw),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Validation(e) => write!(f, "Validation Error: {}", e),
            AppError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser Error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}
impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Parse(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
