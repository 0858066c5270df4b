//! MongoDB 문서 변환 도우미
//!
//! 식별자는 UUID 문자열로, 시각은 BSON DateTime(밀리초)으로 저장합니다.
//! 저장된 값을 도메인 타입으로 되돌릴 수 없으면 `StorageError::Corrupt`입니다.

use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson;
use uuid::Uuid;

use crate::errors::StorageError;

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub(crate) fn from_bson_datetime(value: bson::DateTime) -> Result<DateTime<Utc>, StorageError> {
    Utc.timestamp_millis_opt(value.timestamp_millis())
        .single()
        .ok_or_else(|| StorageError::Corrupt(format!("잘못된 시각 값: {}", value)))
}

pub(crate) fn parse_uuid(value: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(value).map_err(|_| StorageError::Corrupt(format!("잘못된 식별자: {}", value)))
}
