//! 인증 관련 설정
//!
//! 액세스 토큰 서명 키(`JWT_SECRET`)와 결제 웹훅 API 키(`POLKA_KEY`)를 담습니다.
//! 두 값 모두 시작 시점에 필수이며, 누락되면 서버가 기동되지 않습니다.
//! 로드된 값은 읽기 전용으로 각 서비스 생성자에 주입됩니다.

use std::fmt;

use crate::config::{ConfigError, required};

/// JWT 서명 설정
#[derive(Clone)]
pub struct JwtConfig {
    /// HS256 서명 키 (바이트열)
    pub secret: Vec<u8>,
}

impl JwtConfig {
    pub(crate) fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = required(lookup, "JWT_SECRET")?;
        Ok(Self { secret: secret.into_bytes() })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// 외부 결제 시스템(Polka) 웹훅 설정
#[derive(Clone)]
pub struct WebhookConfig {
    /// `Authorization: ApiKey <key>` 로 전달되어야 하는 키
    pub polka_key: String,
}

impl WebhookConfig {
    pub(crate) fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self { polka_key: required(lookup, "POLKA_KEY")? })
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("polka_key", &"<redacted>")
            .finish()
    }
}
