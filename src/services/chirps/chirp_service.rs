//! Chirp 작성/삭제 서비스
//!
//! 작성 시 작성자를 인증된 사용자로 고정하고, 삭제 시 소유권을 검사합니다.

use std::sync::Arc;

use log::info;
use uuid::Uuid;

use crate::domain::entities::chirps::Chirp;
use crate::errors::{AppError, AppResult};
use crate::repositories::ChirpStore;
use crate::services::auth::AuthGuard;
use crate::services::chirps::censor::censor;

/// 본문 최대 길이 (문자 수)
pub const MAX_CHIRP_LENGTH: usize = 140;

/// 본문에서 가려지는 단어
pub const PROFANE_WORDS: &[&str] = &["kerfuffle", "sharbert", "fornax"];

#[derive(Clone)]
pub struct ChirpService {
    store: Arc<dyn ChirpStore>,
    guard: AuthGuard,
}

impl ChirpService {
    pub fn new(store: Arc<dyn ChirpStore>, guard: AuthGuard) -> Self {
        Self { store, guard }
    }

    /// 길이를 검사하고 금칙어를 가린 본문을 반환합니다.
    pub fn clean_body(&self, body: &str) -> AppResult<String> {
        if body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(AppError::ValidationError("Chirp is too long".to_string()));
        }

        Ok(censor(body, PROFANE_WORDS))
    }

    pub async fn create(&self, user_id: Uuid, body: &str) -> AppResult<Chirp> {
        let chirp = Chirp::new(self.clean_body(body)?, user_id);
        self.store.create(&chirp).await?;

        info!("Chirp 작성: {} (user_id: {})", chirp.id, user_id);
        Ok(chirp)
    }

    /// 소유자만 삭제할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - Chirp가 없음
    /// * `AppError::AuthorizationError` - 요청자가 작성자가 아님 (403)
    pub async fn delete(&self, user_id: Uuid, chirp_id: Uuid) -> AppResult<()> {
        let chirp = self
            .store
            .find_by_id(chirp_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chirp not found".to_string()))?;

        self.guard.authorize_ownership(user_id, chirp.user_id)?;

        if !self.store.delete(chirp_id).await? {
            return Err(AppError::NotFound("Chirp not found".to_string()));
        }

        info!("Chirp 삭제: {} (user_id: {})", chirp_id, user_id);
        Ok(())
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        Ok(self.store.delete_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::in_memory::InMemoryChirpStore;
    use crate::services::auth::TokenService;

    fn service() -> ChirpService {
        ChirpService::new(
            Arc::new(InMemoryChirpStore::default()),
            AuthGuard::new(TokenService::new(b"secret"), "polka"),
        )
    }

    #[test]
    fn test_clean_body_length_limit() {
        let chirps = service();

        assert!(chirps.clean_body(&"a".repeat(MAX_CHIRP_LENGTH)).is_ok());
        assert!(matches!(
            chirps.clean_body(&"a".repeat(MAX_CHIRP_LENGTH + 1)),
            Err(AppError::ValidationError(_))
        ));
        // 멀티바이트 문자도 문자 수로 셈
        assert!(chirps.clean_body(&"가".repeat(MAX_CHIRP_LENGTH)).is_ok());
    }

    #[actix_web::test]
    async fn test_create_binds_owner_and_censors() {
        let chirps = service();
        let user_id = Uuid::new_v4();

        let chirp = chirps.create(user_id, "what a kerfuffle").await.unwrap();

        assert_eq!(chirp.user_id, user_id);
        assert_eq!(chirp.body, "what a ****");
    }

    #[actix_web::test]
    async fn test_only_owner_can_delete() {
        let chirps = service();
        let owner = Uuid::new_v4();
        let chirp = chirps.create(owner, "mine").await.unwrap();

        let err = chirps.delete(Uuid::new_v4(), chirp.id).await.unwrap_err();
        assert!(matches!(err, AppError::AuthorizationError(_)));

        chirps.delete(owner, chirp.id).await.unwrap();

        let err = chirps.delete(owner, chirp.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
