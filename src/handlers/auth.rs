//! Authentication HTTP Handlers
//!
//! 로그인, 액세스 토큰 갱신, 리프레시 토큰 폐기를 처리합니다.
//!
//! # Endpoints
//!
//! - `POST /api/login` - 이메일/비밀번호로 액세스 토큰(1시간)과 리프레시 토큰(60일) 발급
//! - `POST /api/refresh` - `Authorization: Bearer <refresh_token>` 으로 새 액세스 토큰 발급
//! - `POST /api/revoke` - `Authorization: Bearer <refresh_token>` 폐기 (멱등)
//!
//! 갱신/폐기 실패는 원인(없음, 만료, 폐기됨)과 무관하게 모두 401입니다.

use actix_web::{post, web, HttpRequest, HttpResponse};
use log::info;
use validator::Validate;

use crate::app_state::AppState;
use crate::domain::dto::tokens::RefreshResponse;
use crate::domain::dto::users::{LoginRequest, LoginResponse};
use crate::errors::AppError;
use crate::services::auth::extract_bearer;

/// 로컬 로그인
///
/// # Errors
///
/// * `401` - 이메일이 없거나 비밀번호 불일치 (동일 응답)
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .users
        .authenticate(&payload.email, &payload.password)
        .await?;

    let tokens = state.sessions.issue_pair(user.id).await?;

    info!("로그인 성공: {}", user.id);

    Ok(HttpResponse::Ok().json(LoginResponse::new(user, tokens)))
}

/// 리프레시 토큰으로 새 액세스 토큰 발급
#[post("/refresh")]
pub async fn refresh(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_bearer(req.headers())?;
    let token = state.sessions.refresh_access_token(refresh_token).await?;

    Ok(HttpResponse::Ok().json(RefreshResponse { token }))
}

/// 리프레시 토큰 폐기
#[post("/revoke")]
pub async fn revoke(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_bearer(req.headers())?;
    state.sessions.revoke(refresh_token).await?;

    Ok(HttpResponse::NoContent().finish())
}
