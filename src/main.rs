//! Chirpy 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 MongoDB, Redis 연결을 설정한 뒤
//! 서비스 그래프([`AppState`])를 구성하여 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use chirpy_service::app_state::{AppState, Stores};
use chirpy_service::caching::redis::RedisClient;
use chirpy_service::config::{AppConfig, ServerConfig};
use chirpy_service::db::Database;
use chirpy_service::repositories::chirps::ChirpRepository;
use chirpy_service::repositories::tokens::RefreshTokenRepository;
use chirpy_service::repositories::users::UserRepository;
use chirpy_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Chirpy 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("실행 환경: {:?}", config.environment);

    let stores = initialize_data_stores(&config).await?;

    let state = AppState::new(&config, stores).map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(&config.server, web::Data::new(state)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(server: &ServerConfig, state: web::Data<AppState>) -> io::Result<()> {
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(server.rate_limit_per_second)
        .burst_size(server.rate_limit_burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND, RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        server.rate_limit_per_second, server.rate_limit_burst_size
    );

    info!("🌐 서버가 http://{} 에서 실행중입니다", server.bind_address);
    info!("📍 Health check: http://{}/api/healthz", server.bind_address);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
    .bind(server.bind_address.as_str())?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 표준 에러로 남깁니다.
    match loaded {
        Ok(file) => eprintln!("Current profile: {} ({} 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (env 파일 로드 실패: {})", profile, e),
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화하고 저장소를 구성합니다
///
/// 연결 또는 인덱스 생성 실패 시 기동을 중단합니다.
async fn initialize_data_stores(config: &AppConfig) -> io::Result<Stores> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::connect(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?);

    let redis = Arc::new(RedisClient::connect(&config.cache.redis_url).await.map_err(|e| {
        error!("Redis 연결 실패: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?);

    let users = UserRepository::new(database.clone(), redis, config.cache.user_ttl_seconds);
    let chirps = ChirpRepository::new(database.clone());
    let refresh_tokens = RefreshTokenRepository::new(database);

    users.create_indexes().await.map_err(io::Error::other)?;
    chirps.create_indexes().await.map_err(io::Error::other)?;

    Ok(Stores {
        users: Arc::new(users),
        refresh_tokens: Arc::new(refresh_tokens),
        chirps: Arc::new(chirps),
    })
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
