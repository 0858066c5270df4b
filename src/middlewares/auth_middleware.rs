//! # Authentication Middleware
//!
//! 스코프 단위로 Bearer 액세스 토큰 인증을 강제하는 Actix-web 미들웨어입니다.
//! 인증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 extensions에 저장하고, 실패하면 핸들러를 호출하지 않고 401로 응답합니다.
//!
//! ```rust,ignore
//! use chirpy_service::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/chirps")
//!         .wrap(AuthMiddleware::required())
//!         .service(create_chirp)
//!         .service(delete_chirp),
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 필수 미들웨어
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
