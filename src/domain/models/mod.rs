//! # Domain Models
//!
//! 저장되지 않는 값 객체입니다. JWT 클레임, 토큰 쌍, 요청 단위 인증 결과를 포함합니다.

pub mod auth;
pub mod token;
