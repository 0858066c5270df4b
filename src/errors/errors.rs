//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스/핸들러 계층의
//! 에러를 일관된 JSON 응답(`{"error": "..."}`)으로 변환합니다.
//!
//! 인증 코어의 [`AuthError`]와 저장소의 [`StorageError`]는 `From` 구현을 통해
//! 변환되며, 인증 실패는 원인과 무관하게 하나의 401 메시지로 합쳐집니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn delete_chirp(&self, user_id: Uuid, chirp_id: Uuid) -> AppResult<()> {
//!     let chirp = self.chirps.find_by_id(chirp_id).await?
//!         .ok_or_else(|| AppError::NotFound("Chirp not found".to_string()))?;
//!
//!     self.guard.authorize_ownership(user_id, chirp.user_id)?;
//!     Ok(())
//! }
//! ```

use log::error;
use thiserror::Error;

use crate::errors::auth_error::{AuthError, StorageError};

/// 인증 실패 시 클라이언트에게 노출되는 유일한 메시지
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// 500 응답에 사용하는 메시지 (내부 상세는 로그에만 남김)
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 계열은 상세 내용을 로그로만 남기고 일반 메시지로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            error!("요청 처리 실패: {}", self);
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": message
        }))
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Conflict(msg) => AppError::ConflictError(msg),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Forbidden => AppError::AuthorizationError(e.to_string()),
            AuthError::HashingError(msg) => AppError::InternalError(msg),
            AuthError::Storage(storage) => storage.into(),
            _ => AppError::AuthenticationError(UNAUTHORIZED_MESSAGE.to_string()),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
