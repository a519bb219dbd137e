use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::contents::content::{Content, ContentType};
use crate::domain::entities::users::user::Language;
use crate::utils::string_utils::{deserialize_optional_string, validate_not_blank};

pub const DEFAULT_PAGE: u64 = 1;
pub const MAX_PAGE: u64 = 1_000_000;
pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

fn default_release_year() -> i32 {
    2024
}

fn default_published() -> bool {
    true
}

fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.iter().any(|genre| genre.trim().is_empty()) {
        return Err(ValidationError::new("empty_genre")
            .with_message("장르는 빈 문자열일 수 없습니다".into()));
    }
    Ok(())
}

/// `POST /contents` 요청 (관리자)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(length(max = 200))]
    pub title_es: Option<String>,
    #[validate(length(max = 200))]
    pub title_pt: Option<String>,

    pub description: Option<String>,
    pub description_es: Option<String>,
    pub description_pt: Option<String>,

    #[serde(default)]
    pub content_type: ContentType,

    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genre: Vec<String>,

    #[serde(default = "default_release_year")]
    #[validate(range(min = 1900, max = 2100, message = "개봉 연도는 1900-2100 사이여야 합니다"))]
    pub release_year: i32,

    #[validate(range(min = 0, max = 10000))]
    pub duration_minutes: Option<i32>,

    #[validate(url(message = "유효한 URL이 아닙니다"))]
    pub thumbnail_url: Option<String>,
    #[validate(url(message = "유효한 URL이 아닙니다"))]
    pub video_url: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "평점은 0.0-5.0 사이여야 합니다"))]
    pub rating: f64,

    #[serde(default = "default_published")]
    pub is_published: bool,

    #[serde(default)]
    pub cast: Vec<String>,
    pub director: Option<String>,
    pub production_company: Option<String>,

    #[validate(range(min = 1))]
    pub season: Option<i32>,
    #[validate(range(min = 1))]
    pub episode: Option<i32>,
    pub series_id: Option<String>,
}

impl CreateContentRequest {
    pub fn into_content(self) -> Content {
        let mut content = Content::new(self.title.trim().to_string(), self.release_year);

        content.title_es = self.title_es;
        content.title_pt = self.title_pt;
        content.description = self.description;
        content.description_es = self.description_es;
        content.description_pt = self.description_pt;
        content.content_type = self.content_type;
        content.genre = self.genre;
        content.duration_minutes = self.duration_minutes;
        content.thumbnail_url = self.thumbnail_url;
        content.video_url = self.video_url;
        content.rating = self.rating;
        content.is_published = self.is_published;
        content.cast = self.cast;
        content.director = self.director;
        content.production_company = self.production_company;
        content.season = self.season;
        content.episode = self.episode;
        content.series_id = self.series_id;

        content
    }
}

/// `PATCH /contents/{id}` 요청 (관리자). 누락된 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    #[validate(length(max = 200))]
    pub title_es: Option<String>,
    #[validate(length(max = 200))]
    pub title_pt: Option<String>,
    pub description: Option<String>,
    pub description_es: Option<String>,
    pub description_pt: Option<String>,
    pub content_type: Option<ContentType>,
    #[validate(custom(function = "validate_genres"))]
    pub genre: Option<Vec<String>>,
    #[validate(range(min = 1900, max = 2100, message = "개봉 연도는 1900-2100 사이여야 합니다"))]
    pub release_year: Option<i32>,
    #[validate(range(min = 0, max = 10000))]
    pub duration_minutes: Option<i32>,
    #[validate(url(message = "유효한 URL이 아닙니다"))]
    pub thumbnail_url: Option<String>,
    #[validate(url(message = "유효한 URL이 아닙니다"))]
    pub video_url: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "평점은 0.0-5.0 사이여야 합니다"))]
    pub rating: Option<f64>,
    pub is_published: Option<bool>,
    pub cast: Option<Vec<String>>,
    pub director: Option<String>,
    pub production_company: Option<String>,
    #[validate(range(min = 1))]
    pub season: Option<i32>,
    #[validate(range(min = 1))]
    pub episode: Option<i32>,
    pub series_id: Option<String>,
}

impl UpdateContentRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.title_es.is_none()
            && self.title_pt.is_none()
            && self.description.is_none()
            && self.description_es.is_none()
            && self.description_pt.is_none()
            && self.content_type.is_none()
            && self.genre.is_none()
            && self.release_year.is_none()
            && self.duration_minutes.is_none()
            && self.thumbnail_url.is_none()
            && self.video_url.is_none()
            && self.rating.is_none()
            && self.is_published.is_none()
            && self.cast.is_none()
            && self.director.is_none()
            && self.production_company.is_none()
            && self.season.is_none()
            && self.episode.is_none()
            && self.series_id.is_none()
    }

    /// 전달된 필드만 엔티티에 반영합니다. 평점은 엔티티 규칙(0.0-5.0)을 따릅니다.
    pub fn apply_to(self, content: &mut Content) {
        if let Some(title) = self.title {
            content.title = title.trim().to_string();
        }
        if let Some(title_es) = self.title_es {
            content.title_es = Some(title_es);
        }
        if let Some(title_pt) = self.title_pt {
            content.title_pt = Some(title_pt);
        }
        if let Some(description) = self.description {
            content.description = Some(description);
        }
        if let Some(description_es) = self.description_es {
            content.description_es = Some(description_es);
        }
        if let Some(description_pt) = self.description_pt {
            content.description_pt = Some(description_pt);
        }
        if let Some(content_type) = self.content_type {
            content.content_type = content_type;
        }
        if let Some(genre) = self.genre {
            content.genre = genre;
        }
        if let Some(release_year) = self.release_year {
            content.release_year = release_year;
        }
        if let Some(duration) = self.duration_minutes {
            content.duration_minutes = Some(duration);
        }
        if let Some(thumbnail_url) = self.thumbnail_url {
            content.thumbnail_url = Some(thumbnail_url);
        }
        if let Some(video_url) = self.video_url {
            content.video_url = Some(video_url);
        }
        if let Some(rating) = self.rating {
            content.update_rating(rating);
        }
        if let Some(is_published) = self.is_published {
            content.is_published = is_published;
        }
        if let Some(cast) = self.cast {
            content.cast = cast;
        }
        if let Some(director) = self.director {
            content.director = Some(director);
        }
        if let Some(company) = self.production_company {
            content.production_company = Some(company);
        }
        if let Some(season) = self.season {
            content.season = Some(season);
        }
        if let Some(episode) = self.episode {
            content.episode = Some(episode);
        }
        if let Some(series_id) = self.series_id {
            content.series_id = Some(series_id);
        }

        content.updated_at = chrono::Utc::now();
    }
}

/// `GET /contents` 쿼리
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContentListQuery {
    pub content_type: Option<ContentType>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "검색어는 100자 이하여야 합니다"))]
    pub search: Option<String>,
    #[validate(range(min = 1, max = 1_000_000, message = "page는 1-1000000 사이여야 합니다"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page는 1-100 사이여야 합니다"))]
    pub per_page: Option<u64>,
    /// 응답의 `display_title` 현지화 언어
    pub lang: Option<Language>,
}

impl ContentListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }
}
