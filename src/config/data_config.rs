//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 데이터베이스, 캐시, 서버 및 비밀번호 해시 비용 설정을 관리합니다.

use crate::config::{ConfigError, parse_or, value_or};

/// bcrypt가 허용하는 cost 범위
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// 애플리케이션 실행 환경 (`PLATFORM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 관리자 초기화 허용, 낮은 bcrypt cost
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 관리자용 일괄 초기화(`POST /admin/reset`)가 허용되는 환경인지 확인합니다.
    pub fn allows_reset(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 비밀번호 해시 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 있으면 검증 후 사용하고, 없으면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub(crate) fn load(
        lookup: &dyn Fn(&str) -> Option<String>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let default_cost = Self::bcrypt_cost_for_env(&environment);
        let bcrypt_cost = parse_or(lookup, "BCRYPT_COST", default_cost)?;

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                reason: format!(
                    "{}..={} 범위여야 합니다 (입력값: {})",
                    MIN_BCRYPT_COST,
                    MAX_BCRYPT_COST,
                    bcrypt_cost
                ),
            });
        }

        Ok(Self { bcrypt_cost })
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 및 Rate Limiting 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst_size: u32,
}

impl ServerConfig {
    pub(crate) fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: value_or(lookup, "BIND_ADDRESS", "127.0.0.1:8080"),
            rate_limit_per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100)?,
            rate_limit_burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200)?,
        })
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 연결 URI (`DB_URL`)
    pub url: String,
    /// 데이터베이스 이름 (`DATABASE_NAME`)
    pub name: String,
}

impl DatabaseConfig {
    pub(crate) fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            url: value_or(lookup, "DB_URL", "mongodb://localhost:27017"),
            name: value_or(lookup, "DATABASE_NAME", "chirpy"),
        }
    }
}

/// Redis 캐시 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub redis_url: String,
    /// 이메일 기준 사용자 캐시 유지 시간(초)
    pub user_ttl_seconds: u64,
}

impl CacheConfig {
    pub(crate) fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            redis_url: value_or(lookup, "REDIS_URL", "redis://127.0.0.1:6379"),
            user_ttl_seconds: parse_or(lookup, "USER_CACHE_TTL_SECONDS", 600)?,
        })
    }
}
