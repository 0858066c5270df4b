//! 요청 단위 인증 결과 추출자
//!
//! - [`AuthenticatedUser`] - Bearer 액세스 토큰으로 인증된 사용자
//! - [`PrivilegedCaller`] - `ApiKey` 로 인증된 시스템 호출자 (결제 웹훅)
//!
//! 두 추출자 모두 상태를 보관하지 않습니다. 매 요청마다 헤더에서 다시 인증합니다.
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 먼저 실행된 경우
//! 요청 extensions에 저장된 결과를 그대로 사용합니다.

use std::future::{ready, Ready};

use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::errors::AppError;

/// 액세스 토큰에서 복원된 사용자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

impl AuthenticatedUser {
    /// 요청 헤더를 검증하여 인증된 사용자를 만듭니다.
    pub fn authenticate(req: &HttpRequest) -> Result<Self, AppError> {
        if let Some(user) = req.extensions().get::<AuthenticatedUser>() {
            return Ok(*user);
        }

        let state = app_state(req)?;
        let user_id = state.guard.authenticate_request(req.headers())?;

        Ok(Self { user_id })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Self::authenticate(req))
    }
}

/// `Authorization: ApiKey <key>` 검증을 통과한 호출자
#[derive(Debug, Clone, Copy)]
pub struct PrivilegedCaller;

impl FromRequest for PrivilegedCaller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let result = app_state(req).and_then(|state| {
            state
                .guard
                .authenticate_privileged(req.headers())
                .map(|_| PrivilegedCaller)
                .map_err(AppError::from)
        });

        ready(result)
    }
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))
}
