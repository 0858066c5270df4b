use actix_web::{get, HttpResponse};

/// 서비스 상태 확인
///
/// 로드밸런서 헬스체크용으로 항상 `200 OK` 평문을 반환합니다.
#[get("/healthz")]
pub async fn readiness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}
