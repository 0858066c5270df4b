//! 테스트용 메모리 저장소
//!
//! MongoDB 구현과 같은 계약(원자적 폐기, 이메일/토큰 중복 시 `Conflict`)을 지킵니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Chirp, RefreshToken, User};
use crate::errors::StorageError;
use crate::repositories::traits::{ChirpStore, RefreshTokenStore, StorageResult, UserStore};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, user: &User) -> StorageResult<()> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|existing| existing.email == user.email) {
            return Err(StorageError::Conflict(format!("email {}", user.email)));
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn update_email_and_password(
        &self,
        user_id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> StorageResult<Option<User>> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|other| other.email == email && other.id != user_id) {
            return Err(StorageError::Conflict(format!("email {}", email)));
        }

        Ok(users.get_mut(&user_id).map(|user| {
            user.email = email.to_string();
            user.hashed_password = hashed_password.to_string();
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn upgrade_to_chirpy_red(&self, user_id: Uuid) -> StorageResult<Option<User>> {
        let mut users = self.users.lock().unwrap();

        Ok(users.get_mut(&user_id).map(|user| {
            user.is_chirpy_red = true;
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let mut users = self.users.lock().unwrap();
        let count = users.len() as u64;
        users.clear();
        Ok(count)
    }
}

#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: Mutex<HashMap<String, RefreshToken>>,
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn insert(&self, record: &RefreshToken) -> StorageResult<()> {
        let mut tokens = self.tokens.lock().unwrap();

        if tokens.contains_key(&record.token) {
            return Err(StorageError::Conflict("refresh token".to_string()));
        }

        tokens.insert(record.token.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, token: &str) -> StorageResult<Option<RefreshToken>> {
        Ok(self.tokens.lock().unwrap().get(token).cloned())
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> StorageResult<Option<RefreshToken>> {
        let mut tokens = self.tokens.lock().unwrap();

        Ok(tokens.get_mut(token).map(|record| {
            record.revoke(at);
            record.clone()
        }))
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let mut tokens = self.tokens.lock().unwrap();
        let count = tokens.len() as u64;
        tokens.clear();
        Ok(count)
    }
}

#[derive(Default)]
pub struct InMemoryChirpStore {
    chirps: Mutex<HashMap<Uuid, Chirp>>,
}

#[async_trait]
impl ChirpStore for InMemoryChirpStore {
    async fn create(&self, chirp: &Chirp) -> StorageResult<()> {
        self.chirps.lock().unwrap().insert(chirp.id, chirp.clone());
        Ok(())
    }

    async fn find_by_id(&self, chirp_id: Uuid) -> StorageResult<Option<Chirp>> {
        Ok(self.chirps.lock().unwrap().get(&chirp_id).cloned())
    }

    async fn delete(&self, chirp_id: Uuid) -> StorageResult<bool> {
        Ok(self.chirps.lock().unwrap().remove(&chirp_id).is_some())
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let mut chirps = self.chirps.lock().unwrap();
        let count = chirps.len() as u64;
        chirps.clear();
        Ok(count)
    }
}
