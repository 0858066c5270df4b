//! 결제 시스템(Polka) 웹훅 요청 DTO
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 멤버십 업그레이드 이벤트 이름
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// `POST /api/polka/webhooks` 요청 본문
///
/// ```json
/// { "event": "user.upgraded", "data": { "user_id": "3311741c-680c-4546-99f3-fc9efac2036c" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolkaWebhookRequest {
    pub event: String,
    /// 관심 없는 이벤트는 data가 없을 수 있음
    #[serde(default)]
    pub data: Option<PolkaWebhookData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: Uuid,
}

impl PolkaWebhookRequest {
    pub fn is_user_upgraded(&self) -> bool {
        self.event == USER_UPGRADED_EVENT
    }
}
