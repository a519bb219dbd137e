//! OAuth `state` 파라미터 발급/검증
//!
//! 서버 저장소 없이 검증할 수 있도록 state 자체에 발급 시각과 서명을 담습니다.
//!
//! ```text
//! state = base64url("{issued_at}:{nonce}") + "." + base64url(hmac_sha256(secret, payload))
//! ```

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::OAuthConfig;
use crate::errors::errors::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

pub struct OAuthStateService {
    secret: String,
    ttl: Duration,
}

impl OAuthStateService {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            OAuthConfig::state_secret(),
            Duration::minutes(OAuthConfig::state_ttl_minutes()),
        )
    }

    fn mac(&self, payload: &str) -> AppResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| AppError::InternalError("OAuth state 서명 키가 올바르지 않습니다".to_string()))?;
        mac.update(payload.as_bytes());
        Ok(mac)
    }

    /// 새 state를 발급합니다. 호출할 때마다 다른 값입니다.
    pub fn issue(&self) -> AppResult<String> {
        let payload = format!("{}:{}", Utc::now().timestamp(), uuid::Uuid::new_v4().simple());
        let encoded = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(self.mac(&encoded)?.finalize().into_bytes());

        Ok(format!("{}.{}", encoded, signature))
    }

    /// 서명과 만료 시간을 확인합니다. 실패하면 `OAuthError`
    pub fn verify(&self, state: &str) -> AppResult<()> {
        let invalid = || AppError::OAuthError("유효하지 않은 OAuth state입니다".to_string());

        let (encoded, signature) = state.split_once('.').ok_or_else(invalid)?;

        let signature = URL_SAFE_NO_PAD.decode(signature).map_err(|_| invalid())?;
        if self.mac(encoded)?.verify_slice(&signature).is_err() {
            log::warn!("OAuth state 서명 불일치");
            return Err(invalid());
        }

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(invalid)?;

        let issued_at: i64 = payload
            .split(':')
            .next()
            .and_then(|ts| ts.parse().ok())
            .ok_or_else(invalid)?;

        let age = Utc::now().timestamp() - issued_at;
        if age < 0 || age > self.ttl.num_seconds() {
            return Err(AppError::OAuthError("OAuth state가 만료되었습니다".to_string()));
        }

        Ok(())
    }
}
