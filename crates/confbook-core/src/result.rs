//! Convenience result type alias for Confbook.

use crate::error::AppError;

/// A specialized `Result` type for Confbook operations.
pub type AppResult<T> = Result<T, AppError>;
