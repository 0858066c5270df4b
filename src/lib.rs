//! Chirpy 서비스 백엔드
//!
//! 짧은 글(Chirp)을 작성하는 마이크로블로그 서비스의 인증 및 인가 백엔드입니다.
//! bcrypt 비밀번호 해시, HS256 액세스 토큰, 폐기 가능한 리프레시 토큰,
//! 결제 웹훅용 API 키 인증, 리소스 소유권 검사를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원 가입, 이메일/비밀번호 변경, Chirpy Red 멤버십
//! - **JWT 인증**: 1시간 액세스 토큰 + 60일 리프레시 토큰
//! - **웹훅 인증**: `Authorization: ApiKey <key>` 비교
//! - **소유권 검사**: 작성자만 Chirp 삭제 가능
//! - **MongoDB**: 사용자, 리프레시 토큰, Chirp 영구 저장
//! - **Redis**: 이메일 기준 사용자 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AppState에 주입된 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / RefreshTokenStore / ChirpStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use chirpy_service::app_state::{AppState, Stores};
//! use chirpy_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let state = web::Data::new(AppState::new(&config, stores)?);
//!
//! let tokens = state.sessions.issue_pair(user.id).await?;
//! ```

pub mod app_state;
pub mod caching;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
