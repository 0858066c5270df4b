//! # Repository Layer
//!
//! 저장소 trait([`traits`])과 MongoDB 구현체입니다.
//!
//! - [`users::UserRepository`] - `users` 컬렉션 + Redis 이메일 캐시
//! - [`tokens::RefreshTokenRepository`] - `refresh_tokens` 컬렉션
//! - [`chirps::ChirpRepository`] - `chirps` 컬렉션

pub mod chirps;
pub(crate) mod documents;
pub mod tokens;
pub mod traits;
pub mod users;

#[cfg(test)]
pub mod in_memory;

pub use traits::{ChirpStore, RefreshTokenStore, StorageResult, UserStore};
