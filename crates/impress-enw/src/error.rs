//! Error types for the CSL-JSON boundary
//!
//! Translation, parsing and formatting are total: missing or unrecognized
//! data degrades to absent fields and default types. Errors only arise when
//! decoding records handed over by a host as JSON.

/// Error type for the JSON boundary
#[derive(Debug, thiserror::Error)]
pub enum EnwError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Invalid value for `{variable}`: {message}")]
    InvalidValue { variable: String, message: String },
}

pub type Result<T> = std::result::Result<T, EnwError>;
