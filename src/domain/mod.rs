//! # Domain Layer
//!
//! - [`entities`] - 영속화되는 엔티티 (사용자, 리프레시 토큰, Chirp)
//! - [`models`] - 저장되지 않는 값 객체 (JWT 클레임, 인증 결과)
//! - [`dto`] - HTTP 요청/응답 본문

pub mod dto;
pub mod entities;
pub mod models;
