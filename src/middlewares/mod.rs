//! # Middlewares
//!
//! - [`AuthMiddleware`] - 스코프 단위 Bearer 토큰 인증

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
