//! JWT 클레임 및 로그인 시 발급되는 토큰 쌍

use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임 (RFC 7519 등록 클레임만 사용)
///
/// - `iss`: 발급자, 항상 [`ACCESS_TOKEN_ISSUER`](crate::services::auth::token_service::ACCESS_TOKEN_ISSUER)
/// - `sub`: 사용자 식별자 (UUID 문자열)
/// - `iat`: 발급 시각 (Unix timestamp, 초)
/// - `exp`: 만료 시각 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// 로그인 성공 시 발급되는 토큰 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// 1시간짜리 서명된 액세스 토큰
    pub access_token: String,
    /// 60일짜리 불투명 리프레시 토큰
    pub refresh_token: String,
}
