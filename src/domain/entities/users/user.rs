//! 사용자 엔티티
//!
//! 자격 증명 레코드(식별자 + 이메일 + bcrypt 해시)와 Chirpy Red 멤버십 여부를 담습니다.
//! 식별자는 생성 시 한 번 발급되며 이후 변경되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 저장소 구현체(MongoDB, 메모리)는 이 타입을 기준으로 레코드를 주고받습니다.
/// `hashed_password`는 절대 응답에 포함되지 않으며, 응답 변환은
/// [`UserResponse`](crate::domain::dto::users::response::UserResponse)가 담당합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
    /// 유료 멤버십 여부 (결제 웹훅으로만 활성화)
    pub is_chirpy_red: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `email` - 로그인 이메일
    /// * `hashed_password` - 이미 해시된 비밀번호
    pub fn new(email: String, hashed_password: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email,
            hashed_password,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }
}
