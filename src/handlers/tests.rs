//! 메모리 저장소를 사용한 HTTP 흐름 테스트

use std::collections::HashMap;
use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app_state::{AppState, Stores};
use crate::config::AppConfig;
use crate::repositories::in_memory::{InMemoryChirpStore, InMemoryRefreshTokenStore, InMemoryUserStore};
use crate::routes::configure_all_routes;

const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

fn state(platform: &str) -> web::Data<AppState> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("JWT_SECRET", "handler-test-secret".to_string()),
        ("POLKA_KEY", POLKA_KEY.to_string()),
        ("PLATFORM", platform.to_string()),
        ("BCRYPT_COST", "4".to_string()),
    ]);
    let config = AppConfig::from_lookup(&|key: &str| vars.get(key).cloned()).unwrap();

    let stores = Stores {
        users: Arc::new(InMemoryUserStore::default()),
        refresh_tokens: Arc::new(InMemoryRefreshTokenStore::default()),
        chirps: Arc::new(InMemoryChirpStore::default()),
    };

    web::Data::new(AppState::new(&config, stores).unwrap())
}

async fn send<S>(app: &S, req: test::TestRequest) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    test::call_service(app, req.to_request()).await
}

async fn register<S>(app: &S, email: &str, password: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = send(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

async fn login<S>(app: &S, email: &str, password: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = send(
        app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    test::read_body_json(resp).await
}

fn bearer(token: &Value) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", token.as_str().unwrap()))
}

#[actix_web::test]
async fn test_healthz() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;

    let resp = send(&app, test::TestRequest::get().uri("/api/healthz")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");
}

#[actix_web::test]
async fn test_register_validation_and_conflict() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;

    let user = register(&app, "walt@breakingbad.com", "04234").await;
    assert_eq!(user["email"], "walt@breakingbad.com");
    assert_eq!(user["is_chirpy_red"], false);
    assert!(Uuid::parse_str(user["id"].as_str().unwrap()).is_ok());
    assert!(user.get("hashed_password").is_none());

    let duplicate = send(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "walt@breakingbad.com", "password": "other" })),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    for body in [
        json!({ "email": "not-an-email", "password": "pw" }),
        json!({ "email": "jesse@breakingbad.com", "password": "" }),
    ] {
        let resp = send(&app, test::TestRequest::post().uri("/api/users").set_json(body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn test_login_failures_share_one_response() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;
    register(&app, "walt@breakingbad.com", "04234").await;

    let wrong_password = send(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "walt@breakingbad.com", "password": "wrong" })),
    )
    .await;
    let unknown_email = send(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "saul@bettercall.com", "password": "04234" })),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let a: Value = test::read_body_json(wrong_password).await;
    let b: Value = test::read_body_json(unknown_email).await;
    assert_eq!(a, b);
}

#[actix_web::test]
async fn test_session_lifecycle() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;
    let user = register(&app, "walt@breakingbad.com", "04234").await;

    let session = login(&app, "walt@breakingbad.com", "04234").await;
    assert_eq!(session["id"], user["id"]);
    assert_eq!(session["refresh_token"].as_str().unwrap().len(), 64);

    // 액세스 토큰으로 보호된 요청
    let updated = send(
        &app,
        test::TestRequest::put()
            .uri("/api/users")
            .insert_header(bearer(&session["token"]))
            .set_json(json!({ "email": "heisenberg@breakingbad.com", "password": "losPollos" })),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(updated).await;
    assert_eq!(updated["id"], user["id"]);
    assert_eq!(updated["email"], "heisenberg@breakingbad.com");

    let unauthenticated = send(
        &app,
        test::TestRequest::put()
            .uri("/api/users")
            .set_json(json!({ "email": "x@example.com", "password": "x" })),
    )
    .await;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    // 리프레시 토큰으로 새 액세스 토큰 발급
    let refreshed = send(
        &app,
        test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header(bearer(&session["refresh_token"])),
    )
    .await;
    assert_eq!(refreshed.status(), StatusCode::OK);
    let refreshed: Value = test::read_body_json(refreshed).await;
    assert!(refreshed["token"].as_str().is_some_and(|t| !t.is_empty()));

    // 액세스 토큰은 리프레시 토큰으로 쓸 수 없음
    let wrong_kind = send(
        &app,
        test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header(bearer(&session["token"])),
    )
    .await;
    assert_eq!(wrong_kind.status(), StatusCode::UNAUTHORIZED);

    // 폐기는 멱등
    for _ in 0..2 {
        let revoked = send(
            &app,
            test::TestRequest::post()
                .uri("/api/revoke")
                .insert_header(bearer(&session["refresh_token"])),
        )
        .await;
        assert_eq!(revoked.status(), StatusCode::NO_CONTENT);
    }

    let after_revoke = send(
        &app,
        test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header(bearer(&session["refresh_token"])),
    )
    .await;
    assert_eq!(after_revoke.status(), StatusCode::UNAUTHORIZED);

    let missing = send(&app, test::TestRequest::post().uri("/api/refresh")).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let unknown = send(
        &app,
        test::TestRequest::post()
            .uri("/api/revoke")
            .insert_header((AUTHORIZATION, "Bearer 00ff")),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_chirp_create_and_ownership() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;

    let walt = register(&app, "walt@breakingbad.com", "04234").await;
    register(&app, "jesse@breakingbad.com", "yo").await;
    let walt_session = login(&app, "walt@breakingbad.com", "04234").await;
    let jesse_session = login(&app, "jesse@breakingbad.com", "yo").await;

    let anonymous = send(
        &app,
        test::TestRequest::post()
            .uri("/api/chirps")
            .set_json(json!({ "body": "hello" })),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let created = send(
        &app,
        test::TestRequest::post()
            .uri("/api/chirps")
            .insert_header(bearer(&walt_session["token"]))
            .set_json(json!({ "body": "What a Kerfuffle this is" })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let chirp: Value = test::read_body_json(created).await;
    assert_eq!(chirp["body"], "What a **** this is");
    assert_eq!(chirp["user_id"], walt["id"]);

    let too_long = send(
        &app,
        test::TestRequest::post()
            .uri("/api/chirps")
            .insert_header(bearer(&walt_session["token"]))
            .set_json(json!({ "body": "a".repeat(141) })),
    )
    .await;
    assert_eq!(too_long.status(), StatusCode::BAD_REQUEST);

    let chirp_uri = format!("/api/chirps/{}", chirp["id"].as_str().unwrap());

    let not_owner = send(
        &app,
        test::TestRequest::delete()
            .uri(&chirp_uri)
            .insert_header(bearer(&jesse_session["token"])),
    )
    .await;
    assert_eq!(not_owner.status(), StatusCode::FORBIDDEN);

    let bad_id = send(
        &app,
        test::TestRequest::delete()
            .uri("/api/chirps/not-a-uuid")
            .insert_header(bearer(&walt_session["token"])),
    )
    .await;
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);

    let owner = send(
        &app,
        test::TestRequest::delete()
            .uri(&chirp_uri)
            .insert_header(bearer(&walt_session["token"])),
    )
    .await;
    assert_eq!(owner.status(), StatusCode::NO_CONTENT);

    let gone = send(
        &app,
        test::TestRequest::delete()
            .uri(&chirp_uri)
            .insert_header(bearer(&walt_session["token"])),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_validate_chirp() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;

    let resp = send(
        &app,
        test::TestRequest::post()
            .uri("/api/validate_chirp")
            .set_json(json!({ "body": "I hear Mastodon is better than Chirpy. sharbert I need to migrate" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["cleaned_body"],
        "I hear Mastodon is better than Chirpy. **** I need to migrate"
    );

    let resp = send(
        &app,
        test::TestRequest::post()
            .uri("/api/validate_chirp")
            .set_json(json!({ "body": "x".repeat(141) })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_polka_webhook() {
    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;
    let user = register(&app, "walt@breakingbad.com", "04234").await;

    let upgrade = json!({ "event": "user.upgraded", "data": { "user_id": user["id"] } });

    let no_key = send(
        &app,
        test::TestRequest::post().uri("/api/polka/webhooks").set_json(&upgrade),
    )
    .await;
    assert_eq!(no_key.status(), StatusCode::UNAUTHORIZED);

    let wrong_key = send(
        &app,
        test::TestRequest::post()
            .uri("/api/polka/webhooks")
            .insert_header((AUTHORIZATION, "ApiKey wrong"))
            .set_json(&upgrade),
    )
    .await;
    assert_eq!(wrong_key.status(), StatusCode::UNAUTHORIZED);

    let api_key = (AUTHORIZATION, format!("ApiKey {}", POLKA_KEY));

    let ignored = send(
        &app,
        test::TestRequest::post()
            .uri("/api/polka/webhooks")
            .insert_header(api_key.clone())
            .set_json(json!({ "event": "user.payment_failed", "data": { "user_id": user["id"] } })),
    )
    .await;
    assert_eq!(ignored.status(), StatusCode::NO_CONTENT);
    let session = login(&app, "walt@breakingbad.com", "04234").await;
    assert_eq!(session["is_chirpy_red"], false);

    let unknown_user = send(
        &app,
        test::TestRequest::post()
            .uri("/api/polka/webhooks")
            .insert_header(api_key.clone())
            .set_json(json!({ "event": "user.upgraded", "data": { "user_id": Uuid::new_v4() } })),
    )
    .await;
    assert_eq!(unknown_user.status(), StatusCode::NOT_FOUND);

    let upgraded = send(
        &app,
        test::TestRequest::post()
            .uri("/api/polka/webhooks")
            .insert_header(api_key)
            .set_json(&upgrade),
    )
    .await;
    assert_eq!(upgraded.status(), StatusCode::NO_CONTENT);

    let session = login(&app, "walt@breakingbad.com", "04234").await;
    assert_eq!(session["is_chirpy_red"], true);
}

#[actix_web::test]
async fn test_admin_reset_requires_dev_platform() {
    let prod = test::init_service(App::new().app_data(state("prod")).configure(configure_all_routes)).await;
    let forbidden = send(&prod, test::TestRequest::post().uri("/admin/reset")).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let app = test::init_service(App::new().app_data(state("dev")).configure(configure_all_routes)).await;
    register(&app, "walt@breakingbad.com", "04234").await;
    let session = login(&app, "walt@breakingbad.com", "04234").await;

    let reset = send(&app, test::TestRequest::post().uri("/admin/reset")).await;
    assert_eq!(reset.status(), StatusCode::OK);
    let body: Value = test::read_body_json(reset).await;
    assert_eq!(body["deleted"]["users"], 1);
    assert_eq!(body["deleted"]["refresh_tokens"], 1);

    let login_after_reset = send(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "walt@breakingbad.com", "password": "04234" })),
    )
    .await;
    assert_eq!(login_after_reset.status(), StatusCode::UNAUTHORIZED);

    let refresh_after_reset = send(
        &app,
        test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header(bearer(&session["refresh_token"])),
    )
    .await;
    assert_eq!(refresh_after_reset.status(), StatusCode::UNAUTHORIZED);
}
