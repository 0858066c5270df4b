use serde::{Deserialize, Serialize};

/// Chirp 작성 요청 (`POST /api/chirps`)
///
/// 길이 검사와 금칙어 처리는 [`ChirpService`](crate::services::chirps::ChirpService)에서 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// 본문 검증 요청 (`POST /api/validate_chirp`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}
