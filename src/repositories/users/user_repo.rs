//! # User Repository Implementation
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//! 이메일 기준 조회 결과는 Redis에 캐싱합니다.
//!
//! ## 캐싱 정책
//!
//! - **캐시 키**: `user:email:{email}`
//! - **TTL**: `USER_CACHE_TTL_SECONDS` (기본 600초)
//! - **무효화**: 이메일/비밀번호 변경, 멤버십 업그레이드 시 키를 지우지 않고
//!   TTL 동안 `Invalidated` 표식으로 덮어씁니다. 캐시 채우기는 `SET NX`이므로
//!   변경 전에 MongoDB를 읽은 조회가 오래된 비밀번호 해시를 다시 넣지 못합니다.
//! - **일괄 초기화**: `user:email:*` 키 전체 삭제
//! - **장애 처리**: 캐시 오류는 경고 로그만 남기고 MongoDB 결과를 사용

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use mongodb::bson::{self, doc};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::StorageError;
use crate::repositories::documents::{from_bson_datetime, parse_uuid, to_bson_datetime};
use crate::repositories::traits::{StorageResult, UserStore};

const COLLECTION: &str = "users";
const EMAIL_CACHE_PATTERN: &str = "user:email:*";

/// `users` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    email: String,
    hashed_password: String,
    #[serde(default)]
    is_chirpy_red: bool,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            hashed_password: user.hashed_password.clone(),
            is_chirpy_red: user.is_chirpy_red,
            created_at: to_bson_datetime(user.created_at),
            updated_at: to_bson_datetime(user.updated_at),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = StorageError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        Ok(User {
            id: parse_uuid(&doc.id)?,
            email: doc.email,
            hashed_password: doc.hashed_password,
            is_chirpy_red: doc.is_chirpy_red,
            created_at: from_bson_datetime(doc.created_at)?,
            updated_at: from_bson_datetime(doc.updated_at)?,
        })
    }
}

/// Redis에 저장되는 캐시 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
enum CachedUser {
    Present(User),
    Invalidated,
}

/// 캐시 조회 결과
#[derive(Debug)]
enum CacheLookup {
    Hit(User),
    /// `refill`이 거짓이면 무효화 표식이 남아 있으므로 캐시를 채우지 않습니다.
    Miss { refill: bool },
}

fn classify_cache_entry(entry: Result<Option<CachedUser>, redis::RedisError>) -> CacheLookup {
    match entry {
        Ok(Some(CachedUser::Present(user))) => CacheLookup::Hit(user),
        Ok(Some(CachedUser::Invalidated)) => CacheLookup::Miss { refill: false },
        Ok(None) => CacheLookup::Miss { refill: true },
        Err(e) => {
            warn!("사용자 캐시 조회 실패: {}", e);
            CacheLookup::Miss { refill: true }
        }
    }
}

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
    cache_ttl_seconds: u64,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>, cache_ttl_seconds: u64) -> Self {
        Self {
            db,
            redis,
            cache_ttl_seconds,
        }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.collection::<UserDocument>(COLLECTION)
    }

    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    async fn invalidate_emails(&self, emails: &[&str]) {
        for email in emails {
            if let Err(e) = self
                .redis
                .set_with_expiry(
                    &Self::email_cache_key(email),
                    &CachedUser::Invalidated,
                    self.cache_ttl_seconds,
                )
                .await
            {
                warn!("사용자 캐시 무효화 실패: {}", e);
            }
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다. 기동 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> StorageResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection().create_index(email_index).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, user: &User) -> StorageResult<()> {
        self.collection().insert_one(UserDocument::from(user)).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let cache_key = Self::email_cache_key(email);

        let refill = match classify_cache_entry(self.redis.get::<CachedUser>(&cache_key).await) {
            CacheLookup::Hit(user) => return Ok(Some(user)),
            CacheLookup::Miss { refill } => refill,
        };

        let user = self
            .collection()
            .find_one(doc! { "email": email })
            .await?
            .map(User::try_from)
            .transpose()?;

        if let (true, Some(user)) = (refill, &user) {
            if let Err(e) = self
                .redis
                .set_if_absent_with_expiry(
                    &cache_key,
                    &CachedUser::Present(user.clone()),
                    self.cache_ttl_seconds,
                )
                .await
            {
                warn!("사용자 캐시 저장 실패: {}", e);
            }
        }

        Ok(user)
    }

    async fn update_email_and_password(
        &self,
        user_id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> StorageResult<Option<User>> {
        let now = Utc::now();

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::Before)
            .build();

        let previous = self
            .collection()
            .find_one_and_update(
                doc! { "_id": user_id.to_string() },
                doc! { "$set": {
                    "email": email,
                    "hashed_password": hashed_password,
                    "updated_at": to_bson_datetime(now),
                } },
            )
            .with_options(options)
            .await?;

        let Some(previous) = previous else {
            return Ok(None);
        };

        self.invalidate_emails(&[previous.email.as_str(), email]).await;

        let mut user = User::try_from(previous)?;
        user.email = email.to_string();
        user.hashed_password = hashed_password.to_string();
        user.updated_at = now;

        Ok(Some(user))
    }

    async fn upgrade_to_chirpy_red(&self, user_id: Uuid) -> StorageResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "_id": user_id.to_string() },
                doc! { "$set": {
                    "is_chirpy_red": true,
                    "updated_at": to_bson_datetime(Utc::now()),
                } },
            )
            .with_options(options)
            .await?;

        match updated {
            Some(doc) => {
                self.invalidate_emails(&[doc.email.as_str()]).await;
                Ok(Some(User::try_from(doc)?))
            }
            None => Ok(None),
        }
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let result = self.collection().delete_many(doc! {}).await?;

        if let Err(e) = self.redis.delete_matching(EMAIL_CACHE_PATTERN).await {
            warn!("사용자 캐시 일괄 무효화 실패: {}", e);
        }

        Ok(result.deleted_count)
    }
}
