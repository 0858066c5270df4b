use serde::{Deserialize, Serialize};

/// 리프레시 토큰 교환 응답 (`POST /api/refresh`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// 새로 발급된 액세스 토큰
    pub token: String,
}
