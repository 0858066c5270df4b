//! 액세스 토큰(JWT) 발급/검증 서비스
//!
//! HS256으로 서명된 상태 없는 토큰을 다룹니다. 검증은 서명과 만료 시각만으로
//! 이루어지며 저장소를 조회하지 않습니다. 따라서 개별 액세스 토큰은 만료 전에
//! 폐기할 수 없고, 폐기 가능한 계층은 리프레시 토큰이 담당합니다.
//!
//! 서명 키는 생성 시점에 한 번 주입되며 교체(rotation)는 지원하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::models::token::AccessTokenClaims;
use crate::errors::AuthError;

/// 모든 액세스 토큰의 `iss` 클레임
pub const ACCESS_TOKEN_ISSUER: &str = "chirpy";

/// 액세스 토큰 기본 유효 기간 (초)
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// JWT 액세스 토큰 서비스
///
/// # Examples
///
/// ```rust,ignore
/// let tokens = TokenService::new(config.jwt.secret.clone());
///
/// let token = tokens.issue_access_token(user.id, TokenService::default_ttl())?;
/// let user_id = tokens.verify_access_token(&token)?;
/// ```
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[ACCESS_TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn default_ttl() -> Duration {
        Duration::seconds(ACCESS_TOKEN_TTL_SECONDS)
    }

    /// 사용자 식별자를 담은 액세스 토큰을 발급합니다.
    ///
    /// `iat = now`, `exp = now + ttl`, `sub = user_id`, `iss = "chirpy"`
    ///
    /// # Errors
    ///
    /// * `AuthError::HashingError` - 서명 실패
    pub fn issue_access_token(&self, user_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();

        let claims = AccessTokenClaims {
            iss: ACCESS_TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::HashingError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰을 검증하고 사용자 식별자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedToken` - 서명, 구조, 발급자가 올바르지 않음
    /// * `AuthError::ExpiredToken` - `now >= exp`
    /// * `AuthError::UntrustedSubject` - `sub`가 유효한 식별자가 아님
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, AuthError> {
        let claims = self.decode_claims(token)?;

        if Utc::now().timestamp() >= claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        parse_subject(&claims.sub)
    }

    /// 서명과 등록 클레임을 검증한 뒤 클레임을 반환합니다.
    pub fn decode_claims(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::MalformedToken,
            })
    }
}

/// `sub` 클레임을 식별자로 복원합니다. nil UUID로 대체하지 않습니다.
fn parse_subject(subject: &str) -> Result<Uuid, AuthError> {
    match Uuid::parse_str(subject) {
        Ok(user_id) if !user_id.is_nil() => Ok(user_id),
        _ => Err(AuthError::UntrustedSubject),
    }
}
