//! 저장소 인터페이스
//!
//! 인증 코어와 서비스 계층은 구체 저장소(MongoDB 등)가 아닌 이 trait들에만 의존합니다.
//! 각 메서드는 하나의 논리적 연산이며, 실패는 [`StorageError`]로만 전달됩니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Chirp, RefreshToken, User};
use crate::errors::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장합니다. 이메일 중복은 `StorageError::Conflict`입니다.
    async fn create_user(&self, user: &User) -> StorageResult<()>;

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// 이메일과 비밀번호 해시를 교체합니다. 사용자가 없으면 `None`을 반환합니다.
    async fn update_email_and_password(
        &self,
        user_id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> StorageResult<Option<User>>;

    /// Chirpy Red 멤버십을 활성화합니다. 사용자가 없으면 `None`을 반환합니다.
    async fn upgrade_to_chirpy_red(&self, user_id: Uuid) -> StorageResult<Option<User>>;

    /// 관리자 일괄 초기화. 삭제된 사용자 수를 반환합니다.
    async fn delete_all(&self) -> StorageResult<u64>;
}

#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 새 레코드를 저장합니다. 같은 토큰이 이미 있으면 `StorageError::Conflict`입니다.
    async fn insert(&self, record: &RefreshToken) -> StorageResult<()>;

    async fn find(&self, token: &str) -> StorageResult<Option<RefreshToken>>;

    /// `revoked_at`이 비어 있을 때만 `at`으로 설정하는 원자적 연산입니다.
    ///
    /// 갱신 후(또는 이미 폐기된) 레코드를 반환하고, 토큰이 없으면 `None`을 반환합니다.
    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> StorageResult<Option<RefreshToken>>;

    async fn delete_all(&self) -> StorageResult<u64>;
}

#[async_trait]
pub trait ChirpStore: Send + Sync {
    async fn create(&self, chirp: &Chirp) -> StorageResult<()>;

    async fn find_by_id(&self, chirp_id: Uuid) -> StorageResult<Option<Chirp>>;

    /// 삭제되었으면 `true`, 없던 레코드면 `false`입니다.
    async fn delete(&self, chirp_id: Uuid) -> StorageResult<bool>;

    async fn delete_all(&self) -> StorageResult<u64>;
}
