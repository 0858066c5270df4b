//! 리프레시 토큰 서비스
//!
//! 256비트 난수를 hex로 인코딩한 불투명 토큰을 발급하고, 저장소에 기록된
//! 만료/폐기 상태를 조회 시점에 강제합니다.
//!
//! # 상태 전이
//!
//! ```text
//! issue ──▶ Active ──(revoke)──▶ Revoked   (되돌릴 수 없음)
//!             │
//!             └──(now >= expires_at)──▶ Expired
//! ```

use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, error};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use crate::domain::entities::RefreshToken;
use crate::errors::{AuthError, StorageError};
use crate::repositories::RefreshTokenStore;

/// 리프레시 토큰 유효 기간 (일)
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// 토큰 엔트로피 (바이트). hex 인코딩 후 64자입니다.
const REFRESH_TOKEN_BYTES: usize = 32;

#[derive(Clone)]
pub struct RefreshTokenService {
    store: Arc<dyn RefreshTokenStore>,
    ttl: Duration,
}

impl RefreshTokenService {
    pub fn new(store: Arc<dyn RefreshTokenStore>) -> Self {
        Self::with_ttl(store, Duration::days(REFRESH_TOKEN_TTL_DAYS))
    }

    pub fn with_ttl(store: Arc<dyn RefreshTokenStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// 새 리프레시 토큰을 발급하고 저장합니다.
    ///
    /// 토큰 충돌은 복구하지 않고 저장소 에러로 그대로 반환합니다.
    pub async fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let token = generate_token()?;
        let record = RefreshToken::new(token.clone(), user_id, self.ttl);

        self.store.insert(&record).await.map_err(|e| {
            if let StorageError::Conflict(_) = e {
                error!("리프레시 토큰 충돌 발생 (user_id: {})", user_id);
            }
            AuthError::Storage(e)
        })?;

        debug!("리프레시 토큰 발급 (user_id: {}, expires_at: {})", user_id, record.expires_at);
        Ok(token)
    }

    /// 토큰을 소유자 식별자로 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenNotFound` - 저장소에 없음
    /// * `AuthError::TokenExpired` - `now >= expires_at`
    /// * `AuthError::TokenRevoked` - `revoked_at`이 설정됨
    pub async fn resolve(&self, token: &str) -> Result<Uuid, AuthError> {
        let record = self.store.find(token).await?.ok_or(AuthError::TokenNotFound)?;

        if record.is_expired_at(Utc::now()) {
            return Err(AuthError::TokenExpired);
        }

        if record.is_revoked() {
            return Err(AuthError::TokenRevoked);
        }

        Ok(record.user_id)
    }

    /// 토큰을 폐기합니다. 이미 폐기된 토큰에 대해서도 성공합니다.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        match self.store.revoke(token, Utc::now()).await? {
            Some(record) => {
                debug!("리프레시 토큰 폐기 (user_id: {})", record.user_id);
                Ok(())
            }
            None => Err(AuthError::TokenNotFound),
        }
    }

    /// 관리자 일괄 초기화
    pub async fn delete_all(&self) -> Result<u64, AuthError> {
        Ok(self.store.delete_all().await?)
    }
}

fn generate_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];

    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::HashingError(format!("난수 생성 실패: {}", e)))?;

    Ok(hex::encode(bytes))
}
