//! 사용자 응답 DTO
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;

/// 사용자 응답 DTO (비밀번호 해시는 포함하지 않음)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            is_chirpy_red,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            created_at,
            updated_at,
            email,
            is_chirpy_red,
        }
    }
}

/// 로그인 응답 DTO
///
/// 사용자 필드와 같은 레벨에 `token`, `refresh_token`을 둡니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new("walt@breakingbad.com".to_string(), "$2b$04$secret-hash".to_string());
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(json["email"], "walt@breakingbad.com");
        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["is_chirpy_red"], false);
        assert!(json.get("hashed_password").is_none());
    }

    #[test]
    fn test_login_response_is_flat() {
        let user = User::new("walt@breakingbad.com".to_string(), "hash".to_string());
        let tokens = TokenPair {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };
        let json = serde_json::to_value(LoginResponse::new(user, tokens)).unwrap();

        assert_eq!(json["email"], "walt@breakingbad.com");
        assert_eq!(json["token"], "access");
        assert_eq!(json["refresh_token"], "refresh");
    }
}
