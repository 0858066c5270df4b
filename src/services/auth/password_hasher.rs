//! 비밀번호 해시 서비스
//!
//! bcrypt(솔트 포함, 의도적으로 느린 해시)로 비밀번호를 해시하고 검증합니다.
//! 길이나 강도 검증은 하지 않습니다. 그것은 요청 DTO의 몫입니다.

use crate::errors::AuthError;

/// bcrypt 기반 비밀번호 해시/검증기
///
/// cost는 [`PasswordConfig`](crate::config::PasswordConfig)에서 주입됩니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 저장 가능한 해시로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::HashingError` - bcrypt 내부 실패 (잘못된 cost 등)
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AuthError::HashingError(format!("비밀번호 해시 실패: {}", e)))
    }

    /// 저장된 해시와 평문 비밀번호를 비교합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::AuthenticationFailure` - 비밀번호 불일치
    /// * `AuthError::HashingError` - 저장된 해시 형식이 잘못됨
    pub fn verify(&self, digest: &str, plaintext: &str) -> Result<(), AuthError> {
        match bcrypt::verify(plaintext, digest) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuthError::AuthenticationFailure),
            Err(e) => Err(AuthError::HashingError(format!("비밀번호 검증 실패: {}", e))),
        }
    }
}
