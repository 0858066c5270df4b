//! 인증 및 인가 서비스 모듈
//!
//! # Features
//!
//! - [`password_hasher`] - bcrypt 비밀번호 해시/검증
//! - [`token_service`] - HS256 액세스 토큰 발급/검증 (상태 없음)
//! - [`refresh_token_service`] - 폐기 가능한 리프레시 토큰 발급/해석/폐기
//! - [`credential_extractor`] - `Bearer`, `ApiKey` 자격 증명 추출
//! - [`auth_guard`] - 요청 인증, 권한 호출 인증, 소유권 검사
//! - [`session_service`] - 로그인/갱신/로그아웃 흐름
//!
//! # Security
//!
//! - 서명 키와 API 키는 생성자로 주입되며 전역 상태가 없습니다.
//! - 인증 실패는 원인과 관계없이 하나의 에러로 노출됩니다.
//! - API 키 비교는 고정 길이 다이제스트로 수행합니다.

pub mod auth_guard;
pub mod credential_extractor;
pub mod password_hasher;
pub mod refresh_token_service;
pub mod session_service;
pub mod token_service;

pub use auth_guard::AuthGuard;
pub use credential_extractor::{extract_api_key, extract_bearer};
pub use password_hasher::PasswordHasher;
pub use refresh_token_service::RefreshTokenService;
pub use session_service::SessionService;
pub use token_service::TokenService;
