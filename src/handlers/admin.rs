//! 관리자 핸들러
//!
//! `PLATFORM=dev` 환경에서만 허용됩니다.

use actix_web::{post, web, HttpResponse};
use log::{info, warn};
use serde_json::json;

use crate::app_state::AppState;
use crate::errors::AppError;

/// 모든 사용자, 리프레시 토큰, Chirp를 삭제합니다.
#[post("/reset")]
pub async fn reset(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if !state.environment.allows_reset() {
        warn!("개발 환경이 아닌 곳에서 초기화 시도 ({:?})", state.environment);
        return Err(AppError::AuthorizationError(
            "Reset is only allowed in dev environment".to_string(),
        ));
    }

    let chirps = state.chirps.delete_all().await?;
    let refresh_tokens = state.sessions.delete_all().await?;
    let users = state.users.delete_all().await?;

    info!(
        "데이터 초기화 완료 (users: {}, refresh_tokens: {}, chirps: {})",
        users, refresh_tokens, chirps
    );

    Ok(HttpResponse::Ok().json(json!({
        "deleted": {
            "users": users,
            "refresh_tokens": refresh_tokens,
            "chirps": chirps,
        }
    })))
}
