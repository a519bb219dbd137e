//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult};
use crate::middlewares::auth_middleware::{AuthMode, RequiredRole};
use crate::services::auth::TokenService;

pub const INSUFFICIENT_PERMISSIONS: &str = "접근 권한이 부족합니다";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = authenticate_request(&req);

            match (mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {} ({})", err, req.path());
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (AuthMode::Required, Ok(user)) => {
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(user.role) {
                            log::warn!(
                                "권한 부족: 사용자 ID {} ({}), 필요 권한: {:?}",
                                user.user_id,
                                user.role.as_str(),
                                required
                            );
                            let response =
                                AppError::AuthorizationError(INSUFFICIENT_PERMISSIONS.to_string())
                                    .error_response();
                            let (req, _) = req.into_parts();
                            return Ok(ServiceResponse::new(req, response).map_into_right_body());
                        }
                    }

                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Ok(user)) => {
                    let allowed = required_role
                        .as_ref()
                        .is_none_or(|required| required.is_satisfied(user.role));

                    if allowed {
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    } else {
                        log::debug!("선택적 인증: 권한 부족하지만 익명으로 진행");
                    }
                }
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization: Bearer` 헤더의 액세스 토큰을 검증합니다.
fn authenticate_request(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_access_token(token)?;

    Ok(AuthenticatedUser::from(claims))
}
