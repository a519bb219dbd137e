//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명한 액세스/리프레시 토큰을 발급하고 검증합니다.
//! 두 토큰은 `token_type` 클레임으로 구분되며, 서로 대체해서 사용할 수 없습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{TokenClaims, TokenPair, TokenType};
use crate::errors::errors::{AppError, AppResult};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// `JWT_*` 환경 설정으로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            &JwtConfig::secret(),
            Duration::minutes(JwtConfig::access_expiration_minutes()),
            Duration::days(JwtConfig::refresh_expiration_days()),
        )
    }

    /// 액세스 토큰 유효 시간(초)
    pub fn access_expires_in(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    fn issue(&self, user: &User, token_type: TokenType, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        self.issue(user, TokenType::Access, self.access_ttl)
    }

    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        self.issue(user, TokenType::Refresh, self.refresh_ttl)
    }

    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        log::debug!("토큰 발급: user_id={}", user.id);

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_expires_in(),
        })
    }

    fn verify(&self, token: &str, expected: TokenType) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })?;

        if claims.token_type != expected {
            return Err(AppError::AuthenticationError(
                "토큰 유형이 올바르지 않습니다".to_string(),
            ));
        }

        Ok(claims)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify(token, TokenType::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify(token, TokenType::Refresh)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}
