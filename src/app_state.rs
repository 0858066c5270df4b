//! 애플리케이션 공유 상태
//!
//! 기동 시 한 번 구성되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.
//! 서명 키와 API 키는 이 시점에 각 서비스에 주입되며 이후 읽기 전용입니다.

use std::sync::Arc;

use crate::config::{AppConfig, Environment};
use crate::errors::AuthError;
use crate::repositories::{ChirpStore, RefreshTokenStore, UserStore};
use crate::services::auth::{AuthGuard, PasswordHasher, RefreshTokenService, SessionService, TokenService};
use crate::services::chirps::ChirpService;
use crate::services::users::UserService;

/// 서비스가 사용하는 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub refresh_tokens: Arc<dyn RefreshTokenStore>,
    pub chirps: Arc<dyn ChirpStore>,
}

pub struct AppState {
    pub environment: Environment,
    pub guard: AuthGuard,
    pub sessions: SessionService,
    pub users: UserService,
    pub chirps: ChirpService,
}

impl AppState {
    /// 설정과 저장소로부터 서비스 그래프를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::HashingError` - 설정된 bcrypt cost를 사용할 수 없음
    pub fn new(config: &AppConfig, stores: Stores) -> Result<Self, AuthError> {
        let tokens = TokenService::new(&config.jwt.secret);
        let guard = AuthGuard::new(tokens.clone(), &config.webhook.polka_key);

        let sessions = SessionService::new(tokens, RefreshTokenService::new(stores.refresh_tokens));
        let users = UserService::new(stores.users, PasswordHasher::new(config.password.bcrypt_cost))?;
        let chirps = ChirpService::new(stores.chirps, guard.clone());

        Ok(Self {
            environment: config.environment,
            guard,
            sessions,
            users,
            chirps,
        })
    }
}
