//! # 사용자 리포지토리
//!
//! 서비스 계층은 [`UserRepository`] trait에만 의존합니다.
//! 운영 구현은 MongoDB `users` 컬렉션을 사용하고, ID 조회 결과를 Redis에 캐싱합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::caching::redis::RedisClient;
use crate::config::{AuthProvider, DataStoreConfig};
use crate::db::Database;
use crate::domain::entities::users::user::{Language, User, UserRole};
use crate::errors::errors::{AppError, AppResult};

pub const USERS_COLLECTION: &str = "users";

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 이메일은 대소문자를 구분하지 않습니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_oauth(&self, provider: AuthProvider, oauth_id: &str) -> AppResult<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// 이메일이 이미 존재하면 `ConflictError`
    async fn create(&self, user: User) -> AppResult<User>;

    /// 존재하지 않는 사용자면 `NotFound`
    async fn update(&self, user: User) -> AppResult<User>;
}

/// MongoDB 저장 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    email: String,
    password_hash: Option<String>,
    nickname: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    preferred_language: Language,
    #[serde(default)]
    role: UserRole,
    is_active: bool,
    is_verified: bool,
    oauth_provider: Option<AuthProvider>,
    oauth_id: Option<String>,
    avatar_url: Option<String>,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub(crate) fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            nickname: user.nickname,
            country: user.country,
            preferred_language: user.preferred_language,
            role: user.role,
            is_active: user.is_active,
            is_verified: user.is_verified,
            oauth_provider: user.oauth_provider,
            oauth_id: user.oauth_id,
            avatar_url: user.avatar_url,
            created_at: to_bson_datetime(user.created_at),
            updated_at: to_bson_datetime(user.updated_at),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id,
            email: document.email,
            password_hash: document.password_hash,
            nickname: document.nickname,
            country: document.country,
            preferred_language: document.preferred_language,
            role: document.role,
            is_active: document.is_active,
            is_verified: document.is_verified,
            oauth_provider: document.oauth_provider,
            oauth_id: document.oauth_id,
            avatar_url: document.avatar_url,
            created_at: from_bson_datetime(document.created_at),
            updated_at: from_bson_datetime(document.updated_at),
        }
    }
}

/// MongoDB + Redis 사용자 리포지토리
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
    redis: Option<RedisClient>,
    cache_ttl_seconds: u64,
}

impl MongoUserRepository {
    pub fn new(db: &Database, redis: Option<RedisClient>) -> Self {
        Self {
            collection: db.get_database().collection(USERS_COLLECTION),
            redis,
            cache_ttl_seconds: DataStoreConfig::user_cache_ttl_seconds(),
        }
    }

    fn cache_key(id: &str) -> String {
        format!("user:{}", id)
    }

    async fn invalidate_cache(&self, id: &str) {
        if let Some(redis) = &self.redis {
            if let Err(e) = redis.del(&Self::cache_key(id)).await {
                log::warn!("사용자 캐시 무효화 실패 (id={}): {}", id, e);
            }
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let oauth_index = IndexModel::builder()
            .keys(doc! { "oauth_provider": 1, "oauth_id": 1 })
            .options(IndexOptions::builder().name("oauth_identity".to_string()).build())
            .build();

        self.collection
            .create_indexes([email_index, oauth_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(id);

        if let Some(redis) = &self.redis {
            if let Ok(Some(cached)) = redis.get::<User>(&cache_key).await {
                log::debug!("사용자 캐시 적중: {}", id);
                return Ok(Some(cached));
            }
        }

        let user = self
            .collection
            .find_one(doc! { "_id": id })
            .await?
            .map(User::from);

        if let (Some(redis), Some(user)) = (&self.redis, &user) {
            let _ = redis
                .set_with_expiry(&cache_key, user, self.cache_ttl_seconds)
                .await;
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.trim().to_lowercase();

        Ok(self
            .collection
            .find_one(doc! { "email": email })
            .await?
            .map(User::from))
    }

    async fn find_by_oauth(&self, provider: AuthProvider, oauth_id: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(doc! { "oauth_provider": provider.as_str(), "oauth_id": oauth_id })
            .await?
            .map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "email": email.trim().to_lowercase() })
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let document = UserDocument::from(user.clone());

        self.collection.insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let document = UserDocument::from(user.clone());

        let result = self
            .collection
            .replace_one(doc! { "_id": user.id.as_str() }, &document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.invalidate_cache(&user.id).await;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_conversion_preserves_fields() {
        let mut user = User::new_local(
            "fan@example.com".to_string(),
            "hash".to_string(),
            "fan".to_string(),
            "CL".to_string(),
            Language::Es,
        );
        user.oauth_provider = Some(AuthProvider::Google);
        user.oauth_id = Some("g-1".to_string());

        let restored = User::from(UserDocument::from(user.clone()));

        assert_eq!(restored.id, user.id);
        assert_eq!(restored.oauth_provider, Some(AuthProvider::Google));
        assert_eq!(
            restored.created_at.timestamp_millis(),
            user.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_document_uses_mongo_id_field() {
        let user = User::new_local(
            "fan@example.com".to_string(),
            "hash".to_string(),
            "fan".to_string(),
            String::new(),
            Language::Ko,
        );

        let document = bson::to_document(&UserDocument::from(user.clone())).unwrap();

        assert_eq!(document.get_str("_id").unwrap(), user.id);
        assert!(document.get_datetime("created_at").is_ok());
        assert_eq!(document.get_str("preferred_language").unwrap(), "ko");
    }
}
