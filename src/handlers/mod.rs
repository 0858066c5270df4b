//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 핸들러는 요청 본문 검증과
//! 응답 DTO 변환만 담당하고, 비즈니스 로직은 [`AppState`](crate::app_state::AppState)에
//! 등록된 서비스에 위임합니다.
//!
//! ## 모듈 구성
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`health`] | `GET /api/healthz` |
//! | [`users`] | `POST /api/users`, `PUT /api/users` |
//! | [`auth`] | `POST /api/login`, `POST /api/refresh`, `POST /api/revoke` |
//! | [`webhooks`] | `POST /api/polka/webhooks` |
//! | [`chirps`] | `POST /api/chirps`, `DELETE /api/chirps/{chirp_id}`, `POST /api/validate_chirp` |
//! | [`admin`] | `POST /admin/reset` |
//!
//! ## 인증 방식
//!
//! - **Bearer 액세스 토큰**: [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 추출자
//!   또는 `/api/chirps` 스코프의 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)
//! - **Bearer 리프레시 토큰**: `/api/refresh`, `/api/revoke` 에서 직접 추출
//! - **ApiKey**: [`PrivilegedCaller`](crate::domain::models::auth::PrivilegedCaller) 추출자
//!
//! ```rust,ignore
//! #[put("")]
//! pub async fn update_user(
//!     state: web::Data<AppState>,
//!     user: AuthenticatedUser,
//!     payload: web::Json<UpdateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let updated = state.users.update_credentials(user.user_id, payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
//! }
//! ```

pub mod admin;
pub mod auth;
pub mod chirps;
pub mod health;
pub mod users;
pub mod webhooks;

#[cfg(test)]
mod tests;
