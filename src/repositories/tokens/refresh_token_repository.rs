//! MongoDB `refresh_tokens` 컬렉션에 대한 [`RefreshTokenStore`] 구현
//!
//! 토큰 문자열 자체를 `_id`로 사용하므로 충돌은 중복 키 에러로 드러납니다.
//! 폐기는 `revoked_at: null` 조건의 `find_one_and_update` 한 번으로 수행되어
//! 동시에 들어온 폐기 요청이 서로의 기록을 덮어쓰지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::RefreshToken;
use crate::errors::StorageError;
use crate::repositories::documents::{from_bson_datetime, parse_uuid, to_bson_datetime};
use crate::repositories::traits::{RefreshTokenStore, StorageResult};

const COLLECTION: &str = "refresh_tokens";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RefreshTokenDocument {
    #[serde(rename = "_id")]
    token: String,
    user_id: String,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
    expires_at: bson::DateTime,
    revoked_at: Option<bson::DateTime>,
}

impl From<&RefreshToken> for RefreshTokenDocument {
    fn from(record: &RefreshToken) -> Self {
        Self {
            token: record.token.clone(),
            user_id: record.user_id.to_string(),
            created_at: to_bson_datetime(record.created_at),
            updated_at: to_bson_datetime(record.updated_at),
            expires_at: to_bson_datetime(record.expires_at),
            revoked_at: record.revoked_at.map(to_bson_datetime),
        }
    }
}

impl TryFrom<RefreshTokenDocument> for RefreshToken {
    type Error = StorageError;

    fn try_from(doc: RefreshTokenDocument) -> Result<Self, Self::Error> {
        Ok(RefreshToken {
            user_id: parse_uuid(&doc.user_id)?,
            created_at: from_bson_datetime(doc.created_at)?,
            updated_at: from_bson_datetime(doc.updated_at)?,
            expires_at: from_bson_datetime(doc.expires_at)?,
            revoked_at: doc.revoked_at.map(from_bson_datetime).transpose()?,
            token: doc.token,
        })
    }
}

pub struct RefreshTokenRepository {
    db: Arc<Database>,
}

impl RefreshTokenRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<RefreshTokenDocument> {
        self.db.collection::<RefreshTokenDocument>(COLLECTION)
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn insert(&self, record: &RefreshToken) -> StorageResult<()> {
        self.collection()
            .insert_one(RefreshTokenDocument::from(record))
            .await?;
        Ok(())
    }

    async fn find(&self, token: &str) -> StorageResult<Option<RefreshToken>> {
        self.collection()
            .find_one(doc! { "_id": token })
            .await?
            .map(RefreshToken::try_from)
            .transpose()
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> StorageResult<Option<RefreshToken>> {
        let at = to_bson_datetime(at);

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let revoked = self
            .collection()
            .find_one_and_update(
                doc! { "_id": token, "revoked_at": null },
                doc! { "$set": { "revoked_at": at, "updated_at": at } },
            )
            .with_options(options)
            .await?;

        match revoked {
            Some(doc) => Ok(Some(RefreshToken::try_from(doc)?)),
            // 이미 폐기되었거나 존재하지 않음
            None => self.find(token).await,
        }
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let result = self.collection().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
