//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 회원 가입 | 201 Created |
//! | `PUT` | `/api/users` | 이메일/비밀번호 변경 (Bearer) | 200 OK |
//!
//! 응답은 [`UserResponse`]로 변환되므로 비밀번호 해시는 노출되지 않습니다.

use actix_web::{post, put, web, HttpResponse};
use log::info;
use validator::Validate;

use crate::app_state::AppState;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;

/// 회원 가입
///
/// # Errors
///
/// * `400` - 이메일 형식 오류 또는 빈 비밀번호
/// * `409` - 이미 사용 중인 이메일
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.users.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 인증된 사용자의 이메일과 비밀번호 변경
///
/// # Errors
///
/// * `401` - 액세스 토큰 없음/무효
/// * `404` - 토큰의 사용자가 더 이상 존재하지 않음
#[put("")]
pub async fn update_user(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = state
        .users
        .update_credentials(user.user_id, payload.into_inner())
        .await?;

    info!("사용자 자격 증명 변경: {}", updated.id);

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}
