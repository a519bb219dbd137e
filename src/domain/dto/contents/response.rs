use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::contents::content::{Content, ContentType};
use crate::domain::entities::users::user::Language;

/// 콘텐츠 응답
///
/// `video_url`은 인증된 사용자에게만 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse {
    pub id: String,
    pub title: String,
    pub title_es: Option<String>,
    pub title_pt: Option<String>,
    /// 요청 언어 기준 제목
    pub display_title: String,
    pub description: Option<String>,
    pub description_es: Option<String>,
    pub description_pt: Option<String>,
    pub content_type: ContentType,
    pub genre: Vec<String>,
    pub release_year: i32,
    pub duration_minutes: Option<i32>,
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub rating: f64,
    pub view_count: u64,
    pub is_published: bool,
    pub is_viewable: bool,
    pub cast: Vec<String>,
    pub director: Option<String>,
    pub production_company: Option<String>,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    pub series_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentResponse {
    pub fn from_content(content: Content, include_video: bool, lang: Option<Language>) -> Self {
        let display_title = match lang {
            Some(lang) => content.title_for(lang).to_string(),
            None => content.title.clone(),
        };
        let is_viewable = content.is_viewable();

        Self {
            id: content.id,
            title: content.title,
            title_es: content.title_es,
            title_pt: content.title_pt,
            display_title,
            description: content.description,
            description_es: content.description_es,
            description_pt: content.description_pt,
            content_type: content.content_type,
            genre: content.genre,
            release_year: content.release_year,
            duration_minutes: content.duration_minutes,
            thumbnail_url: content.thumbnail_url,
            video_url: content.video_url.filter(|_| include_video),
            rating: content.rating,
            view_count: content.view_count,
            is_published: content.is_published,
            is_viewable,
            cast: content.cast,
            director: content.director,
            production_company: content.production_company,
            season: content.season,
            episode: content.episode,
            series_id: content.series_id,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

/// `GET /contents` 페이지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentListResponse {
    pub items: Vec<ContentResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl ContentListResponse {
    pub fn new(items: Vec<ContentResponse>, total: u64, page: u64, per_page: u64) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with_video() -> Content {
        let mut content = Content::new("Vincenzo".to_string(), 2021);
        content.title_es = Some("Vincenzo (ES)".to_string());
        content.video_url = Some("https://cdn.example/vincenzo.m3u8".to_string());
        content
    }

    #[test]
    fn test_video_url_hidden_for_anonymous() {
        let response = ContentResponse::from_content(content_with_video(), false, None);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("video_url").is_none());
        assert_eq!(json["is_viewable"], true);
    }

    #[test]
    fn test_video_url_visible_for_authenticated() {
        let response = ContentResponse::from_content(content_with_video(), true, None);

        assert!(response.video_url.is_some());
    }

    #[test]
    fn test_display_title_localized() {
        let response = ContentResponse::from_content(content_with_video(), false, Some(Language::Es));
        assert_eq!(response.display_title, "Vincenzo (ES)");

        let response = ContentResponse::from_content(content_with_video(), false, Some(Language::Pt));
        assert_eq!(response.display_title, "Vincenzo");
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(ContentListResponse::new(vec![], 0, 1, 20).total_pages, 0);
        assert_eq!(ContentListResponse::new(vec![], 20, 1, 20).total_pages, 1);
        assert_eq!(ContentListResponse::new(vec![], 21, 1, 20).total_pages, 2);
    }
}
