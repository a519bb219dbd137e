//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 데이터 저장소, 서버 바인딩, 요청 제한 및 CORS 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버 호스트. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// MongoDB / Redis 연결 설정
pub struct DataStoreConfig;

impl DataStoreConfig {
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "media_catalog_dev".to_string())
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 사용자 조회 캐시 TTL(초). 기본값: 600
    pub fn user_cache_ttl_seconds() -> u64 {
        env::var("USER_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(600)
    }
}

/// IP 단위 요청 제한 설정 (actix-governor)
pub struct RateLimitConfig;

impl RateLimitConfig {
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(100)
    }

    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(200)
    }
}

/// CORS 허용 오리진 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 콤마로 구분된 `CORS_ALLOWED_ORIGINS` 값을 파싱합니다.
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:4321".to_string());

        Self::parse_origins(&raw)
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_parse_cors_origins() {
        let origins = CorsConfig::parse_origins(" https://a.example/ ,,http://localhost:3000");

        assert_eq!(origins, vec!["https://a.example", "http://localhost:3000"]);
    }
}
