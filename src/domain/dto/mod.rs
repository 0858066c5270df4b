//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 요청/응답 본문 타입입니다. 엔티티를 그대로 노출하지 않도록
//! 응답 DTO는 `From<Entity>` 변환을 제공합니다.

pub mod chirps;
pub mod tokens;
pub mod users;
pub mod webhooks;
