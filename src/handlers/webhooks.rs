//! 결제 시스템(Polka) 웹훅
//!
//! `Authorization: ApiKey <key>` 가 설정된 `POLKA_KEY`와 일치해야 합니다.
//! `user.upgraded` 외의 이벤트는 처리하지 않고 204로 응답합니다.

use actix_web::{post, web, HttpResponse};
use log::debug;

use crate::app_state::AppState;
use crate::domain::dto::webhooks::PolkaWebhookRequest;
use crate::domain::models::auth::PrivilegedCaller;
use crate::errors::AppError;

#[post("/webhooks")]
pub async fn polka_webhook(
    state: web::Data<AppState>,
    _caller: PrivilegedCaller,
    payload: web::Json<PolkaWebhookRequest>,
) -> Result<HttpResponse, AppError> {
    let event = payload.into_inner();

    if !event.is_user_upgraded() {
        debug!("무시된 웹훅 이벤트: {}", event.event);
        return Ok(HttpResponse::NoContent().finish());
    }

    let data = event
        .data
        .ok_or_else(|| AppError::ValidationError("data.user_id is required".to_string()))?;

    state.users.upgrade_to_chirpy_red(data.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
