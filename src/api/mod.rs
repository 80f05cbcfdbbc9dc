//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod favorites;

pub use favorites::*;

/// Handler result type; errors are converted to JSON responses at the boundary.
pub type ApiResult<T> = Result<T, crate::errors::AppError>;
