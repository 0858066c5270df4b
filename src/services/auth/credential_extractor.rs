//! Authorization 헤더에서 자격 증명을 추출합니다.
//!
//! 순수 함수이며 I/O가 없습니다. 접두사(`Bearer `, `ApiKey `)는 대소문자를 구분합니다.

use actix_web::http::header::{HeaderMap, AUTHORIZATION};

use crate::errors::AuthError;

const BEARER_PREFIX: &str = "Bearer ";
const API_KEY_PREFIX: &str = "ApiKey ";

/// `Authorization: Bearer <token>` 에서 토큰을 꺼냅니다.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    extract_with_prefix(headers, BEARER_PREFIX)
}

/// `Authorization: ApiKey <key>` 에서 키를 꺼냅니다.
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    extract_with_prefix(headers, API_KEY_PREFIX)
}

/// 헤더가 없거나, 접두사가 다르거나, 값이 비어 있으면 `MissingCredential`입니다.
fn extract_with_prefix<'a>(headers: &'a HeaderMap, prefix: &str) -> Result<&'a str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    let credential = value
        .trim()
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or(AuthError::MissingCredential)?;

    if credential.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(credential)
}
