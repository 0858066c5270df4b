//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 그룹화하여 등록합니다.
//!
//! # Auth Levels
//!
//! ## 인증 불필요 (Public 라우트)
//! - `GET /api/healthz`, `POST /api/users`, `POST /api/login`, `POST /api/validate_chirp`
//! - `POST /api/refresh`, `POST /api/revoke` (리프레시 토큰으로 직접 인증)
//!
//! ## Bearer 액세스 토큰 필요
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/chirps")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::chirps::create_chirp)
//! );
//! ```
//! `PUT /api/users`는 스코프 대신 `AuthenticatedUser` 추출자로 인증합니다.
//!
//! ## ApiKey 필요
//! - `POST /api/polka/webhooks`
//!
//! ## 개발 환경 전용
//! - `POST /admin/reset`
//!
//! # Examples
//!
//! ```rust,ignore
//! let app = App::new()
//!     .app_data(state.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::health::readiness)
            .configure(configure_user_routes)
            .configure(configure_auth_routes)
            .configure(configure_chirp_routes)
            .configure(configure_webhook_routes),
    );

    configure_admin_routes(cfg);
}

/// `POST /api/users` (Public), `PUT /api/users` (Bearer)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::update_user),
    );
}

/// 로그인, 토큰 갱신, 토큰 폐기
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login)
        .service(handlers::auth::refresh)
        .service(handlers::auth::revoke);
}

/// Chirp 작성/삭제는 인증 미들웨어로 보호합니다.
fn configure_chirp_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::chirps::validate_chirp);

    cfg.service(
        web::scope("/chirps")
            .wrap(AuthMiddleware::required())
            .service(handlers::chirps::create_chirp)
            .service(handlers::chirps::delete_chirp),
    );
}

fn configure_webhook_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/polka").service(handlers::webhooks::polka_webhook));
}

fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/admin").service(handlers::admin::reset));
}
