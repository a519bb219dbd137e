//! 인증된 사용자 모델과 요청 추출기
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰 검증 후
//! request extensions에 [`AuthenticatedUser`]를 넣으면, 핸들러는 아래 추출기로 꺼내 씁니다.
//!
//! | 추출기 | 사용자 없음 | 관리자 아님 |
//! |---|---|---|
//! | `AuthenticatedUser` | 401 | 통과 |
//! | `OptionalUser` | `None` | 통과 |
//! | `AdminUser` | 401 | 403 |

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserRole;
use crate::domain::models::token::TokenClaims;
use crate::errors::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}

/// 인증이 선택적인 엔드포인트용 추출기
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

/// 관리자 전용 엔드포인트용 추출기
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match req.extensions().get::<AuthenticatedUser>() {
            None => Err(AppError::AuthenticationError("인증되지 않은 요청입니다".to_string())),
            Some(user) if user.is_admin() => Ok(AdminUser(user.clone())),
            Some(user) => {
                log::warn!("관리자 권한 없음: user_id={} path={}", user.user_id, req.path());
                Err(AppError::AuthorizationError("관리자 권한이 필요합니다".to_string()))
            }
        };

        ready(result.map_err(Into::into))
    }
}
