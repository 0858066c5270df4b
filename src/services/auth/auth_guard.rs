//! 요청 단위 인가 가드
//!
//! 자격 증명 추출, 액세스 토큰 검증, API 키 비교, 소유권 검사를 조합합니다.
//! 요청 사이에 보관하는 상태는 없고, 매 요청이 처음부터 다시 판정됩니다.
//!
//! ```text
//! Unauthenticated ──(credential)──▶ Authenticated ──(ownership)──▶ Authorized | Forbidden
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let guard = AuthGuard::new(TokenService::new(secret), polka_key);
//!
//! let user_id = guard.authenticate_request(req.headers())?;     // 401
//! guard.authorize_ownership(user_id, chirp.user_id)?;           // 403
//! guard.authenticate_privileged(req.headers())?;                // 401
//! ```

use actix_web::http::header::HeaderMap;
use log::{debug, warn};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::errors::AuthError;
use crate::services::auth::credential_extractor::{extract_api_key, extract_bearer};
use crate::services::auth::token_service::TokenService;

#[derive(Clone)]
pub struct AuthGuard {
    tokens: TokenService,
    privileged_key_digest: [u8; 32],
}

impl AuthGuard {
    pub fn new(tokens: TokenService, privileged_key: impl AsRef<[u8]>) -> Self {
        Self {
            tokens,
            privileged_key_digest: digest(privileged_key.as_ref()),
        }
    }

    /// Bearer 액세스 토큰으로 요청자를 식별합니다.
    ///
    /// 헤더 누락, 형식 오류, 만료, 주체 파싱 실패를 구분하지 않고
    /// 모두 `AuthError::Unauthorized`로 반환합니다.
    pub fn authenticate_request(&self, headers: &HeaderMap) -> Result<Uuid, AuthError> {
        extract_bearer(headers)
            .and_then(|token| self.tokens.verify_access_token(token))
            .map_err(|e| {
                debug!("액세스 토큰 인증 실패: {}", e);
                AuthError::Unauthorized
            })
    }

    /// `ApiKey` 자격 증명을 설정된 키와 비교합니다.
    pub fn authenticate_privileged(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let key = extract_api_key(headers).map_err(|_| AuthError::Unauthorized)?;

        if constant_time_eq(&digest(key.as_bytes()), &self.privileged_key_digest) {
            Ok(())
        } else {
            warn!("잘못된 API 키로 권한 호출 시도");
            Err(AuthError::Unauthorized)
        }
    }

    /// 인증된 사용자가 리소스 소유자인지 확인합니다.
    pub fn authorize_ownership(&self, user_id: Uuid, owner_id: Uuid) -> Result<(), AuthError> {
        if user_id == owner_id {
            Ok(())
        } else {
            warn!("소유자가 아닌 사용자의 변경 시도 (user_id: {}, owner_id: {})", user_id, owner_id);
            Err(AuthError::Forbidden)
        }
    }
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// 고정 길이 다이제스트를 비교하므로 비교 시간이 입력 키 길이나 내용에 의존하지 않습니다.
fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
