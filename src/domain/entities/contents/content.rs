//! Content Entity Implementation
//!
//! 드라마, 영화, 뮤직비디오, 예능 등 카탈로그 항목을 표현하는 엔티티입니다.
//! 제목과 설명은 기본값 외에 스페인어/포르투갈어 현지화 필드를 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::Language;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// 콘텐츠 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Drama,
    Movie,
    Mv,
    Variety,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Drama => "drama",
            ContentType::Movie => "movie",
            ContentType::Mv => "mv",
            ContentType::Variety => "variety",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "drama" => Some(ContentType::Drama),
            "movie" => Some(ContentType::Movie),
            "mv" => Some(ContentType::Mv),
            "variety" => Some(ContentType::Variety),
            _ => None,
        }
    }
}

/// 카탈로그 콘텐츠 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub title: String,
    pub title_es: Option<String>,
    pub title_pt: Option<String>,
    pub description: Option<String>,
    pub description_es: Option<String>,
    pub description_pt: Option<String>,
    pub content_type: ContentType,
    pub genre: Vec<String>,
    pub release_year: i32,
    pub duration_minutes: Option<i32>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub rating: f64,
    pub view_count: u64,
    pub is_published: bool,
    pub cast: Vec<String>,
    pub director: Option<String>,
    pub production_company: Option<String>,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    pub series_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// 기본값(드라마, 공개, 조회수 0, 평점 0.0)으로 새 콘텐츠를 만듭니다.
    pub fn new(title: String, release_year: i32) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            title_es: None,
            title_pt: None,
            description: None,
            description_es: None,
            description_pt: None,
            content_type: ContentType::default(),
            genre: Vec::new(),
            release_year,
            duration_minutes: None,
            thumbnail_url: None,
            video_url: None,
            rating: MIN_RATING,
            view_count: 0,
            is_published: true,
            cast: Vec::new(),
            director: None,
            production_company: None,
            season: None,
            episode: None,
            series_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 언어에 맞는 제목. 현지화 제목이 비어있으면 기본 제목을 사용합니다.
    pub fn title_for(&self, lang: Language) -> &str {
        let localized = match lang {
            Language::Es => self.title_es.as_deref(),
            Language::Pt => self.title_pt.as_deref(),
            Language::Ko | Language::En => None,
        };

        localized
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.title)
    }

    pub fn description_for(&self, lang: Language) -> Option<&str> {
        let localized = match lang {
            Language::Es => self.description_es.as_deref(),
            Language::Pt => self.description_pt.as_deref(),
            Language::Ko | Language::En => None,
        };

        localized
            .filter(|description| !description.trim().is_empty())
            .or(self.description.as_deref())
    }

    pub fn increment_view_count(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }

    /// 0.0 ~ 5.0 범위의 평점만 반영합니다. 범위 밖이면 false를 반환하고 무시합니다.
    pub fn update_rating(&mut self, rating: f64) -> bool {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return false;
        }

        self.rating = rating;
        self.updated_at = Utc::now();
        true
    }

    /// 공개 상태이고 재생 가능한 영상 URL이 있는지 확인
    pub fn is_viewable(&self) -> bool {
        self.is_published
            && self
                .video_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Content {
        let mut content = Content::new("사랑의 불시착".to_string(), 2019);
        content.title_es = Some("Aterrizaje de emergencia en tu corazón".to_string());
        content.title_pt = Some(String::new());
        content.description = Some("A Korean drama".to_string());
        content.description_es = Some("Un drama coreano".to_string());
        content
    }

    #[test]
    fn test_new_content_defaults() {
        let content = Content::new("Title".to_string(), 2024);

        assert_eq!(content.content_type, ContentType::Drama);
        assert!(content.is_published);
        assert_eq!(content.view_count, 0);
        assert_eq!(content.rating, 0.0);
        assert!(content.genre.is_empty());
    }

    #[test]
    fn test_title_for_language() {
        let content = sample();

        assert_eq!(
            content.title_for(Language::Es),
            "Aterrizaje de emergencia en tu corazón"
        );
        // 빈 현지화 제목은 기본 제목으로 대체
        assert_eq!(content.title_for(Language::Pt), "사랑의 불시착");
        assert_eq!(content.title_for(Language::Ko), "사랑의 불시착");
        assert_eq!(content.title_for(Language::En), "사랑의 불시착");
    }

    #[test]
    fn test_description_for_language() {
        let content = sample();

        assert_eq!(content.description_for(Language::Es), Some("Un drama coreano"));
        assert_eq!(content.description_for(Language::Pt), Some("A Korean drama"));
    }

    #[test]
    fn test_increment_view_count() {
        let mut content = sample();
        content.increment_view_count();
        content.increment_view_count();

        assert_eq!(content.view_count, 2);
    }

    #[test]
    fn test_update_rating_ignores_out_of_range() {
        let mut content = sample();

        assert!(content.update_rating(4.5));
        assert_eq!(content.rating, 4.5);

        assert!(!content.update_rating(5.1));
        assert!(!content.update_rating(-0.1));
        assert_eq!(content.rating, 4.5);

        assert!(content.update_rating(0.0));
        assert!(content.update_rating(5.0));
    }

    #[test]
    fn test_is_viewable() {
        let mut content = sample();
        assert!(!content.is_viewable());

        content.video_url = Some("https://cdn.example/v.m3u8".to_string());
        assert!(content.is_viewable());

        content.is_published = false;
        assert!(!content.is_viewable());

        content.is_published = true;
        content.video_url = Some("  ".to_string());
        assert!(!content.is_viewable());
    }

    #[test]
    fn test_content_type_parsing() {
        assert_eq!(ContentType::from_str("MV"), Some(ContentType::Mv));
        assert_eq!(ContentType::from_str("anime"), None);
        assert_eq!(serde_json::to_string(&ContentType::Variety).unwrap(), "\"variety\"");
    }
}
