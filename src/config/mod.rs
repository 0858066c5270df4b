//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 시작 시점에 [`AppConfig::from_env`]로 한 번만 읽어 들이고,
//! 이후에는 각 구성 요소의 생성자에 값으로 주입합니다. 전역 접근자는 없습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 캐시, 서버, bcrypt 설정
//! - [`auth_config`] - JWT 서명 키, 웹훅 API 키
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수 (누락 시 기동 실패)
//! export JWT_SECRET="your-super-secret-key"
//! export POLKA_KEY="f271c81ff7084ee5b99a5091b42d486e"
//!
//! # 선택
//! export PLATFORM="dev"                      # dev, test, staging, prod (기본값: prod)
//! export DB_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="chirpy"
//! export REDIS_URL="redis://127.0.0.1:6379"
//! export USER_CACHE_TTL_SECONDS="600"
//! export BIND_ADDRESS="127.0.0.1:8080"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export BCRYPT_COST="12"                    # 4-31 범위
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use chirpy_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let tokens = TokenService::new(config.jwt.secret.clone());
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// 설정 로드 실패
///
/// 요청 처리 중이 아니라 기동 시점에만 발생하며, 발생하면 프로세스를 종료합니다.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("필수 환경 변수가 설정되지 않았습니다: {0}")]
    Missing(&'static str),

    #[error("환경 변수 {key} 값이 올바르지 않습니다: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub jwt: JwtConfig,
    pub webhook: WebhookConfig,
    pub password: PasswordConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// `.env.*` 파일은 호출 전에 `dotenv`로 로드되어 있어야 합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = Environment::from_str(&value_or(lookup, "PLATFORM", "prod"));

        Ok(Self {
            environment,
            jwt: JwtConfig::load(lookup)?,
            webhook: WebhookConfig::load(lookup)?,
            password: PasswordConfig::load(lookup, environment)?,
            server: ServerConfig::load(lookup)?,
            database: DatabaseConfig::load(lookup),
            cache: CacheConfig::load(lookup)?,
        })
    }
}

/// 비어 있지 않은 필수 값을 읽습니다.
pub(crate) fn required(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub(crate) fn value_or(lookup: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// 값이 있으면 파싱하고, 없으면 기본값을 사용합니다. 파싱 실패는 에러입니다.
pub(crate) fn parse_or<T>(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let lookup = lookup_from(&[("JWT_SECRET", "secret"), ("POLKA_KEY", "polka")]);
        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.jwt.secret, b"secret".to_vec());
        assert_eq!(config.webhook.polka_key, "polka");
        assert_eq!(config.password.bcrypt_cost, 12);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "chirpy");
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.cache.user_ttl_seconds, 600);
    }

    #[test]
    fn test_missing_jwt_secret_is_fatal() {
        let lookup = lookup_from(&[("POLKA_KEY", "polka")]);
        let err = AppConfig::from_lookup(&lookup).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_blank_polka_key_is_fatal() {
        let lookup = lookup_from(&[("JWT_SECRET", "secret"), ("POLKA_KEY", "   ")]);
        let err = AppConfig::from_lookup(&lookup).unwrap_err();
        assert_eq!(err, ConfigError::Missing("POLKA_KEY"));
    }

    #[test]
    fn test_platform_selects_environment_and_cost() {
        let lookup = lookup_from(&[
            ("JWT_SECRET", "secret"),
            ("POLKA_KEY", "polka"),
            ("PLATFORM", "dev"),
        ]);
        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert!(config.environment.allows_reset());
        assert_eq!(config.password.bcrypt_cost, 4);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let lookup = lookup_from(&[
            ("JWT_SECRET", "secret"),
            ("POLKA_KEY", "polka"),
            ("RATE_LIMIT_PER_SECOND", "fast"),
        ]);
        let err = AppConfig::from_lookup(&lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RATE_LIMIT_PER_SECOND", .. }));

        let lookup = lookup_from(&[
            ("JWT_SECRET", "secret"),
            ("POLKA_KEY", "polka"),
            ("BCRYPT_COST", "2"),
        ]);
        let err = AppConfig::from_lookup(&lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BCRYPT_COST", .. }));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug_output() {
        let lookup = lookup_from(&[("JWT_SECRET", "top-secret"), ("POLKA_KEY", "polka-key")]);
        let config = AppConfig::from_lookup(&lookup).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("top-secret"));
        assert!(!rendered.contains("polka-key"));
    }
}
