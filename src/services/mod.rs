//! # Service Layer
//!
//! - [`auth`] - 인증/인가 코어 (비밀번호, 액세스 토큰, 리프레시 토큰, 가드)
//! - [`users`] - 회원 가입, 로그인 확인, 자격 증명 변경, 멤버십
//! - [`chirps`] - Chirp 작성/삭제와 금칙어 필터

pub mod auth;
pub mod chirps;
pub mod users;
