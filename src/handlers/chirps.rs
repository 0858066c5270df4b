//! Chirp HTTP Handlers
//!
//! `/api/chirps` 스코프는 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)로 감싸져 있어
//! 핸들러에 도달한 요청은 이미 인증된 상태입니다.

use actix_web::{delete, post, web, HttpResponse};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::dto::chirps::{
    ChirpResponse, CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;

/// Chirp 작성. 작성자는 항상 인증된 사용자입니다.
#[post("")]
pub async fn create_chirp(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateChirpRequest>,
) -> Result<HttpResponse, AppError> {
    let chirp = state.chirps.create(user.user_id, &payload.body).await?;

    Ok(HttpResponse::Created().json(ChirpResponse::from(chirp)))
}

/// Chirp 삭제
///
/// # Errors
///
/// * `400` - UUID가 아닌 경로 파라미터
/// * `403` - 작성자가 아님
/// * `404` - 존재하지 않는 Chirp
#[delete("/{chirp_id}")]
pub async fn delete_chirp(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    chirp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let chirp_id = Uuid::parse_str(&chirp_id)
        .map_err(|_| AppError::ValidationError("Invalid chirp ID".to_string()))?;

    state.chirps.delete(user.user_id, chirp_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 저장 없이 본문 길이 검사와 금칙어 처리 결과만 반환합니다.
#[post("/validate_chirp")]
pub async fn validate_chirp(
    state: web::Data<AppState>,
    payload: web::Json<ValidateChirpRequest>,
) -> Result<HttpResponse, AppError> {
    let cleaned_body = state.chirps.clean_body(&payload.body)?;

    Ok(HttpResponse::Ok().json(ValidateChirpResponse { cleaned_body }))
}
