//! 캐싱 계층 모듈
//!
//! Redis 기반 JSON 캐시를 제공합니다. 현재는 사용자 조회(`user:{id}`)에만 사용합니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:123", &user, 600).await?;
//! let cached: Option<User> = cache.get("user:123").await?;
//! ```
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
