//! # 사용자 관리 서비스 구현
//!
//! 회원 가입, 로그인 자격 증명 확인, 이메일/비밀번호 변경, 멤버십 업그레이드,
//! 관리자 일괄 초기화를 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 비밀번호는 [`PasswordHasher`]로만 해시/검증
//! - **원인 은닉**: 로그인 실패 시 "없는 이메일"과 "틀린 비밀번호"를 구분하지 않음
//! - **타이밍 균일화**: 없는 이메일에도 더미 해시 검증을 수행
//! - **민감 정보 제거**: 응답 변환은 DTO에서 비밀번호 해시를 제외

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, AuthError, StorageError};
use crate::repositories::UserStore;
use crate::services::auth::PasswordHasher;

/// 로그인 실패 메시지 (원인과 무관하게 동일)
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

/// 존재하지 않는 이메일로 로그인할 때 비교에 사용하는 평문
const TIMING_DUMMY_PASSWORD: &str = "timing-equalization-dummy";

/// 사용자 관리 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let users = UserService::new(user_store, PasswordHasher::new(config.password.bcrypt_cost))?;
///
/// let user = users.create_user(request).await?;
/// let user = users.authenticate("walt@breakingbad.com", "123456").await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    timing_dummy_digest: String,
}

impl UserService {
    /// # Errors
    ///
    /// * `AuthError::HashingError` - 설정된 bcrypt cost로 해시할 수 없음
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Result<Self, AuthError> {
        let timing_dummy_digest = hasher.hash(TIMING_DUMMY_PASSWORD)?;

        Ok(Self {
            store,
            hasher,
            timing_dummy_digest,
        })
    }

    /// 새 사용자 계정을 생성합니다.
    ///
    /// 요청 DTO 검증은 호출자(핸들러)가 먼저 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    /// * `AppError::InternalError` - 해시 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let hashed_password = self.hasher.hash(&request.password)?;
        let user = User::new(request.email, hashed_password);

        self.store.create_user(&user).await.map_err(conflict_as_duplicate_email)?;

        info!("새 사용자 생성: {}", user.id);
        Ok(user)
    }

    /// 이메일과 비밀번호로 사용자를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 이메일이 없거나 비밀번호 불일치 (동일 메시지)
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.store.find_by_email(email).await? else {
            let _ = self.hasher.verify(&self.timing_dummy_digest, password);
            warn!("로그인 실패: 자격 증명 불일치");
            return Err(invalid_credentials());
        };

        match self.hasher.verify(&user.hashed_password, password) {
            Ok(()) => Ok(user),
            Err(AuthError::AuthenticationFailure) => {
                warn!("로그인 실패: 자격 증명 불일치");
                Err(invalid_credentials())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 인증된 사용자의 이메일과 비밀번호를 변경합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰의 사용자가 더 이상 존재하지 않음
    /// * `AppError::ConflictError` - 다른 사용자가 이미 사용 중인 이메일
    pub async fn update_credentials(&self, user_id: Uuid, request: UpdateUserRequest) -> AppResult<User> {
        let hashed_password = self.hasher.hash(&request.password)?;

        let updated = self
            .store
            .update_email_and_password(user_id, &request.email, &hashed_password)
            .await
            .map_err(conflict_as_duplicate_email)?;

        updated.ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Chirpy Red 멤버십을 활성화합니다.
    pub async fn upgrade_to_chirpy_red(&self, user_id: Uuid) -> AppResult<User> {
        let user = self
            .store
            .upgrade_to_chirpy_red(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        info!("Chirpy Red 업그레이드: {}", user.id);
        Ok(user)
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        Ok(self.store.delete_all().await?)
    }
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string())
}

fn conflict_as_duplicate_email(e: StorageError) -> AppError {
    match e {
        StorageError::Conflict(_) => AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()),
        other => other.into(),
    }
}
