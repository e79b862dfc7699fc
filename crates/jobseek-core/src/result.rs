//! Result type aliases for Jobseek.

use crate::JobseekError;

/// A specialized `Result` type for Jobseek operations.
pub type JobseekResult<T> = Result<T, JobseekError>;
