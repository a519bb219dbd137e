//! Authentication HTTP Handlers
//!
//! 회원가입, 로컬 로그인, 토큰 갱신, 현재 사용자 조회, Google OAuth 로그인을 처리합니다.
//!
//! # Endpoints (`/api/v1/auth`)
//!
//! - `POST /register` - 이메일/비밀번호 회원가입
//! - `POST /login` - 로컬 로그인
//! - `POST /refresh` - 리프레시 토큰으로 토큰 쌍 재발급
//! - `GET /me` - 현재 사용자 프로필 (인증 필요)
//! - `GET /oauth/google` - Google 인증 URL 생성
//! - `POST|GET /oauth/google/callback` - Google OAuth 콜백 처리
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::dto::users::request::{
    LoginRequest, OAuthCallbackQuery, OAuthCallbackRequest, RefreshTokenRequest, RegisterRequest,
};
use crate::domain::dto::users::response::{LoginResponse, OAuthLoginResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult};
use crate::middlewares::AuthMiddleware;
use crate::services::auth::{OAuthLoginService, TokenService};
use crate::services::users::UserService;

/// 리프레시 토큰 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// 회원가입
///
/// # Endpoint
/// `POST /auth/register` → 201 `{id, email, nickname}`
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let response = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로컬 로그인
///
/// # Endpoint
/// `POST /auth/login` → 200 `{user, tokens}`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let user = user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let tokens = token_service.generate_token_pair(&user)?;

    log::info!("로컬 로그인 성공: {}", user.id);
    Ok(HttpResponse::Ok().json(LoginResponse::new(&user, tokens)))
}

/// 토큰 갱신
///
/// 리프레시 토큰은 `refresh_token` 쿠키를 우선하고, 없으면 JSON 본문에서 찾습니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> AppResult<HttpResponse> {
    let refresh_token = extract_refresh_token(&req, body.as_deref())?;

    let claims = token_service.verify_refresh_token(&refresh_token)?;

    let user = user_service.get_active_user(&claims.sub).await.map_err(|e| {
        log::warn!("토큰 갱신 거부: 사용자 ID {} ({})", claims.sub, e);
        e
    })?;

    let tokens = token_service.generate_token_pair(&user)?;

    log::info!("토큰 갱신 성공: 사용자 ID {}", user.id);
    Ok(HttpResponse::Ok().json(tokens))
}

/// 현재 인증된 사용자 정보 조회
///
/// # Endpoint
/// `GET /auth/me`
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    let profile = user_service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Google OAuth 인증 URL 생성
///
/// # Endpoint
/// `GET /auth/oauth/google` → `{authorization_url, state}`
#[get("/oauth/google")]
pub async fn google_authorization_url(
    oauth_service: web::Data<OAuthLoginService>,
) -> AppResult<HttpResponse> {
    let response = oauth_service.authorization_url()?;

    Ok(HttpResponse::Ok().json(response))
}

/// Google OAuth 콜백 (프론트엔드가 code/state를 JSON으로 전달)
///
/// # Endpoint
/// `POST /auth/oauth/google/callback`
#[post("/oauth/google/callback")]
pub async fn google_callback(
    oauth_service: web::Data<OAuthLoginService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<OAuthCallbackRequest>,
) -> AppResult<HttpResponse> {
    complete_oauth_login(&oauth_service, &token_service, payload.into_inner()).await
}

/// Google OAuth 콜백 (프로바이더 리다이렉트)
///
/// # Endpoint
/// `GET /auth/oauth/google/callback?code={code}&state={state}`
#[get("/oauth/google/callback")]
pub async fn google_callback_redirect(
    oauth_service: web::Data<OAuthLoginService>,
    token_service: web::Data<TokenService>,
    query: web::Query<OAuthCallbackQuery>,
) -> AppResult<HttpResponse> {
    let request = query.into_inner().into_request().map_err(|error| {
        log::warn!("Google OAuth 에러: {}", error);
        AppError::OAuthError(error)
    })?;

    complete_oauth_login(&oauth_service, &token_service, request).await
}

async fn complete_oauth_login(
    oauth_service: &OAuthLoginService,
    token_service: &TokenService,
    request: OAuthCallbackRequest,
) -> AppResult<HttpResponse> {
    request.validate()?;

    let (user, is_new_user) = oauth_service
        .login(&request.code, &request.state)
        .await
        .map_err(|e| {
            log::warn!("Google OAuth 로그인 실패: {}", e);
            e
        })?;

    let tokens = token_service.generate_token_pair(&user)?;

    log::info!("Google OAuth 로그인 성공: {} (신규: {})", user.id, is_new_user);
    Ok(HttpResponse::Ok().json(OAuthLoginResponse::new(&user, tokens, is_new_user)))
}

/// HTTP 요청에서 리프레시 토큰 추출
fn extract_refresh_token(req: &HttpRequest, body: Option<&RefreshTokenRequest>) -> AppResult<String> {
    if let Some(cookie) = req.cookie(REFRESH_TOKEN_COOKIE) {
        let token = cookie.value().trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    body.and_then(|body| body.refresh_token.as_deref())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::AuthenticationError("리프레시 토큰이 제공되지 않았습니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn test_refresh_token_prefers_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, "from-cookie"))
            .to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: Some("from-body".to_string()),
        };

        assert_eq!(extract_refresh_token(&req, Some(&body)).unwrap(), "from-cookie");
    }

    #[test]
    fn test_refresh_token_from_body() {
        let req = TestRequest::default().to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: Some(" from-body ".to_string()),
        };

        assert_eq!(extract_refresh_token(&req, Some(&body)).unwrap(), "from-body");
    }

    #[test]
    fn test_refresh_token_missing() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(
            extract_refresh_token(&req, None),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            extract_refresh_token(&req, Some(&RefreshTokenRequest::default())),
            Err(AppError::AuthenticationError(_))
        ));
    }
}
