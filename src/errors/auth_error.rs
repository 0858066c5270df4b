//! 인증 코어 에러 분류
//!
//! 자격 증명 해시, 액세스 토큰, 리프레시 토큰, 인가 가드가 반환하는 에러입니다.
//! 코어는 실패를 재시도하거나 삼키지 않고 그대로 호출자(핸들러 계층)에게 돌려주며,
//! HTTP 상태 코드로의 변환은 [`AppError`](crate::errors::AppError)가 담당합니다.
//!
//! | 에러 | 발생 지점 | HTTP |
//! |------|-----------|------|
//! | `MissingCredential` | Authorization 헤더 없음/비어 있음 | 401 |
//! | `MalformedToken` | 서명 또는 구조가 잘못된 액세스 토큰 | 401 |
//! | `ExpiredToken` | 만료된 액세스 토큰 | 401 |
//! | `UntrustedSubject` | `sub` 클레임을 식별자로 파싱할 수 없음 | 401 |
//! | `TokenNotFound` / `TokenExpired` / `TokenRevoked` | 리프레시 토큰 조회 | 401 |
//! | `AuthenticationFailure` | 비밀번호 불일치 | 401 |
//! | `Unauthorized` | 인증 실패 전반 (원인 은닉) | 401 |
//! | `Forbidden` | 인증은 되었으나 리소스 소유자가 아님 | 403 |
//! | `HashingError` | 암호 기본 연산 실패 | 500 |
//! | `Storage` | 저장소 에러 전달 | 409/500 |

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 인증/인가 코어 에러
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("인증 정보가 없습니다")]
    MissingCredential,

    #[error("유효하지 않은 토큰입니다")]
    MalformedToken,

    #[error("토큰이 만료되었습니다")]
    ExpiredToken,

    #[error("토큰 주체를 신뢰할 수 없습니다")]
    UntrustedSubject,

    #[error("리프레시 토큰을 찾을 수 없습니다")]
    TokenNotFound,

    #[error("리프레시 토큰이 만료되었습니다")]
    TokenExpired,

    #[error("리프레시 토큰이 폐기되었습니다")]
    TokenRevoked,

    #[error("자격 증명이 일치하지 않습니다")]
    AuthenticationFailure,

    #[error("인증이 필요합니다")]
    Unauthorized,

    #[error("이 리소스에 대한 권한이 없습니다")]
    Forbidden,

    #[error("암호화 처리 실패: {0}")]
    HashingError(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// 저장소 계층 에러
///
/// 코어는 이 값을 해석하지 않고 그대로 전달합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// 고유 키 충돌 (중복 이메일, 리프레시 토큰 충돌)
    #[error("중복된 레코드: {0}")]
    Conflict(String),

    /// 드라이버/네트워크 실패
    #[error("저장소 오류: {0}")]
    Backend(String),

    /// 저장된 레코드를 도메인 타입으로 복원할 수 없음
    #[error("손상된 레코드: {0}")]
    Corrupt(String),
}

/// `insert_one`은 쓰기 에러로, `find_one_and_update`(findAndModify)는 명령 에러로
/// 중복 키를 보고하므로 두 경로 모두 `Conflict`로 변환합니다.
impl From<mongodb::error::Error> for StorageError {
    fn from(e: mongodb::error::Error) -> Self {
        match e.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                StorageError::Conflict(write_error.message.clone())
            }
            ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
                StorageError::Conflict(command_error.message.clone())
            }
            _ => StorageError::Backend(e.to_string()),
        }
    }
}
