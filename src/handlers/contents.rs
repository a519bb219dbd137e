//! Content Catalog HTTP Handlers
//!
//! 목록/상세 조회는 선택적 인증, 생성/수정/삭제는 관리자 전용입니다.
//! `/api/v1/contents` 스코프 전체에 `AuthMiddleware::optional()`이 적용되어 있으므로
//! 관리자 검사는 `AdminUser` 추출기가 수행합니다.
use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::dto::contents::{ContentListQuery, CreateContentRequest, UpdateContentRequest};
use crate::domain::models::auth::{AdminUser, OptionalUser};
use crate::errors::errors::AppResult;
use crate::services::contents::ContentService;

/// 콘텐츠 목록
///
/// # Endpoint
/// `GET /contents?content_type=&genre=&search=&page=&per_page=&lang=`
#[get("")]
pub async fn list_contents(
    content_service: web::Data<ContentService>,
    viewer: OptionalUser,
    query: web::Query<ContentListQuery>,
) -> AppResult<HttpResponse> {
    let response = content_service
        .list(query.into_inner(), viewer.0.as_ref())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{id}")]
pub async fn get_content(
    content_service: web::Data<ContentService>,
    viewer: OptionalUser,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let response = content_service.get(&id, viewer.0.as_ref()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("")]
pub async fn create_content(
    content_service: web::Data<ContentService>,
    admin: AdminUser,
    payload: web::Json<CreateContentRequest>,
) -> AppResult<HttpResponse> {
    log::debug!("콘텐츠 생성 요청: admin={}", admin.0.user_id);
    let response = content_service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[patch("/{id}")]
pub async fn update_content(
    content_service: web::Data<ContentService>,
    admin: AdminUser,
    id: web::Path<String>,
    payload: web::Json<UpdateContentRequest>,
) -> AppResult<HttpResponse> {
    log::debug!("콘텐츠 수정 요청: admin={} id={}", admin.0.user_id, id);
    let response = content_service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{id}")]
pub async fn delete_content(
    content_service: web::Data<ContentService>,
    admin: AdminUser,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    log::debug!("콘텐츠 삭제 요청: admin={} id={}", admin.0.user_id, id);
    content_service.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
