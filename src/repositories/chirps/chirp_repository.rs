//! MongoDB `chirps` 컬렉션에 대한 [`ChirpStore`] 구현

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::Database;
use crate::domain::entities::Chirp;
use crate::errors::StorageError;
use crate::repositories::documents::{from_bson_datetime, parse_uuid, to_bson_datetime};
use crate::repositories::traits::{ChirpStore, StorageResult};

const COLLECTION: &str = "chirps";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChirpDocument {
    #[serde(rename = "_id")]
    id: String,
    body: String,
    user_id: String,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<&Chirp> for ChirpDocument {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: chirp.id.to_string(),
            body: chirp.body.clone(),
            user_id: chirp.user_id.to_string(),
            created_at: to_bson_datetime(chirp.created_at),
            updated_at: to_bson_datetime(chirp.updated_at),
        }
    }
}

impl TryFrom<ChirpDocument> for Chirp {
    type Error = StorageError;

    fn try_from(doc: ChirpDocument) -> Result<Self, Self::Error> {
        Ok(Chirp {
            id: parse_uuid(&doc.id)?,
            user_id: parse_uuid(&doc.user_id)?,
            created_at: from_bson_datetime(doc.created_at)?,
            updated_at: from_bson_datetime(doc.updated_at)?,
            body: doc.body,
        })
    }
}

pub struct ChirpRepository {
    db: Arc<Database>,
}

impl ChirpRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ChirpDocument> {
        self.db.collection::<ChirpDocument>(COLLECTION)
    }

    /// 작성자 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> StorageResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": 1 })
            .options(IndexOptions::builder().name("user_created_at".to_string()).build())
            .build();

        self.collection().create_index(user_index).await?;
        Ok(())
    }
}

#[async_trait]
impl ChirpStore for ChirpRepository {
    async fn create(&self, chirp: &Chirp) -> StorageResult<()> {
        self.collection().insert_one(ChirpDocument::from(chirp)).await?;
        Ok(())
    }

    async fn find_by_id(&self, chirp_id: Uuid) -> StorageResult<Option<Chirp>> {
        self.collection()
            .find_one(doc! { "_id": chirp_id.to_string() })
            .await?
            .map(Chirp::try_from)
            .transpose()
    }

    async fn delete(&self, chirp_id: Uuid) -> StorageResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": chirp_id.to_string() })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let result = self.collection().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
