//! 로그인 세션 토큰 관리
//!
//! 액세스 토큰 서비스와 리프레시 토큰 서비스를 묶어 로그인, 갱신, 로그아웃 흐름을 제공합니다.

use chrono::Duration;
use log::info;
use uuid::Uuid;

use crate::domain::models::token::TokenPair;
use crate::errors::AuthError;
use crate::services::auth::refresh_token_service::RefreshTokenService;
use crate::services::auth::token_service::TokenService;

#[derive(Clone)]
pub struct SessionService {
    tokens: TokenService,
    refresh_tokens: RefreshTokenService,
    access_ttl: Duration,
}

impl SessionService {
    pub fn new(tokens: TokenService, refresh_tokens: RefreshTokenService) -> Self {
        Self {
            tokens,
            refresh_tokens,
            access_ttl: TokenService::default_ttl(),
        }
    }

    /// 로그인 성공 시 액세스/리프레시 토큰 쌍을 발급합니다.
    pub async fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, AuthError> {
        let access_token = self.tokens.issue_access_token(user_id, self.access_ttl)?;
        let refresh_token = self.refresh_tokens.issue(user_id).await?;

        info!("토큰 쌍 발급 완료 (user_id: {})", user_id);

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 유효한 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 없음/만료/폐기는 모두 `AuthError::Unauthorized`로 반환하고,
    /// 저장소 장애는 그대로 전달합니다.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        let user_id = self
            .refresh_tokens
            .resolve(refresh_token)
            .await
            .map_err(unauthorized_unless_infrastructure)?;

        self.tokens.issue_access_token(user_id, self.access_ttl)
    }

    /// 리프레시 토큰을 폐기합니다. 반복 호출해도 성공합니다.
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AuthError> {
        self.refresh_tokens
            .revoke(refresh_token)
            .await
            .map_err(unauthorized_unless_infrastructure)
    }

    pub async fn delete_all(&self) -> Result<u64, AuthError> {
        self.refresh_tokens.delete_all().await
    }
}

fn unauthorized_unless_infrastructure(e: AuthError) -> AuthError {
    match e {
        AuthError::Storage(_) | AuthError::HashingError(_) => e,
        _ => AuthError::Unauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::repositories::in_memory::InMemoryRefreshTokenStore;

    fn session() -> SessionService {
        let store = Arc::new(InMemoryRefreshTokenStore::default());
        SessionService::new(
            TokenService::new(b"session-secret"),
            RefreshTokenService::new(store),
        )
    }

    #[actix_web::test]
    async fn test_refresh_mints_token_for_same_user() {
        let session = session();
        let user_id = Uuid::new_v4();

        let pair = session.issue_pair(user_id).await.unwrap();
        let access = session.refresh_access_token(&pair.refresh_token).await.unwrap();

        let verifier = TokenService::new(b"session-secret");
        assert_eq!(verifier.verify_access_token(&pair.access_token).unwrap(), user_id);
        assert_eq!(verifier.verify_access_token(&access).unwrap(), user_id);
    }

    #[actix_web::test]
    async fn test_refresh_after_revoke_is_unauthorized() {
        let session = session();
        let pair = session.issue_pair(Uuid::new_v4()).await.unwrap();

        session.revoke(&pair.refresh_token).await.unwrap();
        session.revoke(&pair.refresh_token).await.unwrap();

        let err = session.refresh_access_token(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[actix_web::test]
    async fn test_access_token_is_not_a_refresh_token() {
        let session = session();
        let pair = session.issue_pair(Uuid::new_v4()).await.unwrap();

        let err = session.refresh_access_token(&pair.access_token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));

        let err = session.revoke("unknown").await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }
}
