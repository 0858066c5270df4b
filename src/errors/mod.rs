//! 에러 타입 모음
//!
//! - [`auth_error`] - 인증/인가 코어가 반환하는 도메인 에러 (`AuthError`, `StorageError`)
//! - [`errors`] - HTTP 계층으로 전달되는 `AppError`와 상태 코드 매핑

pub mod auth_error;
pub mod errors;

pub use auth_error::{AuthError, StorageError};
pub use errors::{AppError, AppResult};
