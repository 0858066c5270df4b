//! # Domain Entities
//!
//! 저장소에 영속화되는 핵심 엔티티입니다.
//!
//! - [`users::User`] - 자격 증명 레코드
//! - [`tokens::RefreshToken`] - 폐기 가능한 리프레시 토큰
//! - [`chirps::Chirp`] - 소유자가 고정된 메시지

pub mod chirps;
pub mod tokens;
pub mod users;

pub use chirps::Chirp;
pub use tokens::RefreshToken;
pub use users::User;
