//! 콘텐츠 카탈로그 서비스
//!
//! 목록/상세 조회는 누구나 가능하며, 생성/수정/삭제 권한 검사는 HTTP 계층의
//! `AdminUser` 추출기가 담당합니다.

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::contents::{
    ContentListQuery, ContentListResponse, ContentResponse, CreateContentRequest,
    UpdateContentRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::contents::{ContentFilter, ContentRepository};

pub const CONTENT_NOT_FOUND: &str = "콘텐츠를 찾을 수 없습니다";
pub const CONTENT_NOT_VIEWABLE: &str = "열람할 수 없는 콘텐츠입니다";

pub struct ContentService {
    content_repo: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    /// 공개된 콘텐츠 목록을 페이지 단위로 조회합니다.
    pub async fn list(
        &self,
        query: ContentListQuery,
        viewer: Option<&AuthenticatedUser>,
    ) -> AppResult<ContentListResponse> {
        query.validate()?;

        let page = query.page();
        let per_page = query.per_page();
        let filter = ContentFilter {
            content_type: query.content_type,
            genre: query.genre.clone(),
            search: query.search.clone(),
            published_only: true,
        };

        let total = self.content_repo.count(&filter).await?;
        let contents = self
            .content_repo
            .find(&filter, query.offset(), per_page)
            .await?;

        log::debug!(
            "콘텐츠 목록: filter={:?} page={} per_page={} total={}",
            filter,
            page,
            per_page,
            total
        );

        let include_video = viewer.is_some();
        let items = contents
            .into_iter()
            .map(|content| ContentResponse::from_content(content, include_video, query.lang))
            .collect();

        Ok(ContentListResponse::new(items, total, page, per_page))
    }

    /// 상세 조회. 비공개 콘텐츠는 관리자만 볼 수 있으며, 조회할 때마다 조회수가 증가합니다.
    pub async fn get(&self, id: &str, viewer: Option<&AuthenticatedUser>) -> AppResult<ContentResponse> {
        let mut content = self
            .content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CONTENT_NOT_FOUND.to_string()))?;

        let is_admin = viewer.is_some_and(AuthenticatedUser::is_admin);
        if !content.is_published && !is_admin {
            return Err(AppError::AuthorizationError(CONTENT_NOT_VIEWABLE.to_string()));
        }

        match self.content_repo.increment_view_count(&content.id).await {
            Ok(true) => content.increment_view_count(),
            Ok(false) => {}
            Err(e) => log::warn!("조회수 증가 실패 (id={}): {}", content.id, e),
        }

        Ok(ContentResponse::from_content(content, viewer.is_some(), None))
    }

    pub async fn create(&self, request: CreateContentRequest) -> AppResult<ContentResponse> {
        request.validate()?;

        let created = self.content_repo.create(request.into_content()).await?;
        log::info!("✅ 콘텐츠 생성: {} ({})", created.title, created.id);

        Ok(ContentResponse::from_content(created, true, None))
    }

    pub async fn update(&self, id: &str, request: UpdateContentRequest) -> AppResult<ContentResponse> {
        request.validate()?;

        if request.is_empty() {
            return Err(AppError::ValidationError("변경할 필드가 없습니다".to_string()));
        }

        let mut content = self
            .content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CONTENT_NOT_FOUND.to_string()))?;

        request.apply_to(&mut content);

        let updated = self.content_repo.update(content).await?;
        log::info!("콘텐츠 수정: {}", updated.id);

        Ok(ContentResponse::from_content(updated, true, None))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.content_repo.delete(id).await? {
            return Err(AppError::NotFound(CONTENT_NOT_FOUND.to_string()));
        }

        log::info!("콘텐츠 삭제: {}", id);
        Ok(())
    }
}
