//! # Caching Module
//!
//! 사용자 조회 결과를 Redis에 캐싱합니다. 캐시는 보조 수단이며,
//! 캐시 오류는 로그만 남기고 원본 저장소(MongoDB) 결과를 사용합니다.
//!
//! ```bash
//! REDIS_URL=redis://127.0.0.1:6379  # 기본값
//! ```

pub mod redis;
