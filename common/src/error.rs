//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
///
/// Wrapped errors are exposed through `source()` only, so `{:#}` chains print
/// each cause once.
#[derive(Debug, Error)]
pub enum CommonError {
    /// Output stream error (closed pipe, full disk, ...)
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result alias for the common layer
pub type CommonResult<T> = Result<T, CommonError>;
