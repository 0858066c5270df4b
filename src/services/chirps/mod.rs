//! Chirp 서비스 및 금칙어 필터

pub mod censor;
pub mod chirp_service;

pub use censor::censor;
pub use chirp_service::ChirpService;
