//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 추출합니다.
//! 토큰 검증에는 `App::app_data`로 등록된 `web::Data<TokenService>`를 사용합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::entities::users::user::UserRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 토큰이 있으면 검증하고, 없거나 잘못되어도 익명으로 진행
    Optional,
}

/// 요구되는 역할
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredRole {
    Single(UserRole),
    /// 여러 역할 중 하나 (OR 조건)
    Any(Vec<UserRole>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, role: UserRole) -> bool {
        match self {
            RequiredRole::Single(required) => *required == role,
            RequiredRole::Any(required) => required.contains(&role),
        }
    }
}

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    pub fn required_with_role(role: UserRole) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Single(role))
    }

    pub fn required_with_roles(roles: Vec<UserRole>) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Any(roles))
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::{AdminUser, AuthenticatedUser, OptionalUser};
    use crate::services::auth::TokenService;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use chrono::Duration;

    fn token_service() -> TokenService {
        TokenService::new("middleware-test-secret", Duration::minutes(5), Duration::days(1))
    }

    fn user(role: UserRole) -> User {
        let mut user = User::new_local(
            "viewer@example.com".to_string(),
            "hash".to_string(),
            "viewer".to_string(),
            String::new(),
            Default::default(),
        );
        user.role = role;
        user
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.0.map(|u| u.email).unwrap_or_else(|| "anonymous".to_string()))
    }

    async fn admin_only(admin: AdminUser) -> HttpResponse {
        HttpResponse::Ok().body(admin.0.user_id)
    }

    macro_rules! app {
        () => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(token_service()))
                    .service(
                        web::scope("/required")
                            .wrap(AuthMiddleware::required())
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/optional")
                            .wrap(AuthMiddleware::optional())
                            .route("", web::get().to(maybe))
                            .route("/admin", web::get().to(admin_only)),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(AuthMiddleware::required_with_role(UserRole::Admin))
                            .route("", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    fn bearer(user: &User) -> (header::HeaderName, String) {
        let token = token_service().generate_access_token(user).unwrap();
        (header::AUTHORIZATION, format!("Bearer {}", token))
    }

    #[test]
    fn test_required_role() {
        let single = RequiredRole::Single(UserRole::Admin);
        assert!(single.is_satisfied(UserRole::Admin));
        assert!(!single.is_satisfied(UserRole::User));

        let any = RequiredRole::Any(vec![UserRole::User, UserRole::Admin]);
        assert!(any.is_satisfied(UserRole::User));
        assert!(any.is_satisfied(UserRole::Admin));

        let middleware = AuthMiddleware::required_with_roles(vec![UserRole::User, UserRole::Admin]);
        assert_eq!(middleware.mode, AuthMode::Required);
        assert_eq!(middleware.required_role, Some(any));
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_and_invalid_token() {
        let app = app!();

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/required").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "AUTHENTICATION_FAILED");
        assert!(body["error"].as_str().unwrap().contains("Authorization"));

        let req = actix_test::TestRequest::get()
            .uri("/required")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_rejects_refresh_token() {
        let app = app!();
        let viewer = user(UserRole::User);
        let refresh = token_service().generate_refresh_token(&viewer).unwrap();

        let req = actix_test::TestRequest::get()
            .uri("/required")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", refresh)))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_accepts_access_token() {
        let app = app!();
        let viewer = user(UserRole::User);

        let req = actix_test::TestRequest::get()
            .uri("/required")
            .insert_header(bearer(&viewer))
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;

        assert_eq!(body, viewer.id.as_bytes());
    }

    #[actix_web::test]
    async fn test_optional_proceeds_anonymously() {
        let app = app!();

        let req = actix_test::TestRequest::get()
            .uri("/optional")
            .insert_header((header::AUTHORIZATION, "Bearer garbage"))
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous".as_bytes());

        let viewer = user(UserRole::User);
        let req = actix_test::TestRequest::get()
            .uri("/optional")
            .insert_header(bearer(&viewer))
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "viewer@example.com".as_bytes());
    }

    #[actix_web::test]
    async fn test_role_checks() {
        let app = app!();
        let member = user(UserRole::User);
        let admin = user(UserRole::Admin);

        let req = actix_test::TestRequest::get().uri("/admin").insert_header(bearer(&member)).to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "FORBIDDEN");

        let req = actix_test::TestRequest::get().uri("/admin").insert_header(bearer(&admin)).to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);

        // AdminUser 추출기
        let req = actix_test::TestRequest::get().uri("/optional/admin").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = actix_test::TestRequest::get()
            .uri("/optional/admin")
            .insert_header(bearer(&member))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = actix_test::TestRequest::get()
            .uri("/optional/admin")
            .insert_header(bearer(&admin))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
