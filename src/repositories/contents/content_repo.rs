//! # 콘텐츠 리포지토리
//!
//! 목록 조회는 [`ContentFilter`]의 조건을 모두 AND로 결합합니다.
//! 검색어가 있으면 조회수 내림차순, 없으면 등록일 내림차순으로 정렬합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::contents::content::{Content, ContentType};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::{from_bson_datetime, to_bson_datetime};
use crate::utils::string_utils::{contains_ignore_case, escape_regex};

pub const CONTENTS_COLLECTION: &str = "contents";

/// 검색 대상 필드
pub const SEARCH_FIELDS: [&str; 5] = ["title", "title_es", "title_pt", "description", "director"];

/// 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFilter {
    pub content_type: Option<ContentType>,
    /// 장르 배열에 포함되어야 하는 값
    pub genre: Option<String>,
    /// 대소문자 무시 부분 일치 검색어
    pub search: Option<String>,
    pub published_only: bool,
}

impl ContentFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Default::default()
        }
    }

    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn is_search(&self) -> bool {
        self.search_term().is_some()
    }

    /// MongoDB 쿼리 문서
    pub fn to_document(&self) -> Document {
        let mut query = Document::new();

        if self.published_only {
            query.insert("is_published", true);
        }
        if let Some(content_type) = self.content_type {
            query.insert("content_type", content_type.as_str());
        }
        if let Some(genre) = &self.genre {
            query.insert("genre", genre.as_str());
        }
        if let Some(term) = self.search_term() {
            let pattern = escape_regex(term);
            let clauses: Vec<Document> = SEARCH_FIELDS
                .iter()
                .map(|field| {
                    let mut clause = Document::new();
                    clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                    clause
                })
                .collect();
            query.insert("$or", clauses);
        }

        query
    }

    /// 정렬 문서
    pub fn sort_document(&self) -> Document {
        if self.is_search() {
            doc! { "view_count": -1, "created_at": -1 }
        } else {
            doc! { "created_at": -1 }
        }
    }

    /// 메모리 상의 콘텐츠가 조건에 맞는지 확인합니다. `to_document`와 같은 의미입니다.
    pub fn matches(&self, content: &Content) -> bool {
        if self.published_only && !content.is_published {
            return false;
        }
        if self.content_type.is_some_and(|content_type| content_type != content.content_type) {
            return false;
        }
        if let Some(genre) = &self.genre {
            if !content.genre.iter().any(|g| g == genre) {
                return false;
            }
        }
        if let Some(term) = self.search_term() {
            let fields = [
                Some(content.title.as_str()),
                content.title_es.as_deref(),
                content.title_pt.as_deref(),
                content.description.as_deref(),
                content.director.as_deref(),
            ];
            if !fields.into_iter().flatten().any(|field| contains_ignore_case(field, term)) {
                return false;
            }
        }
        true
    }
}

/// 콘텐츠 저장소 추상화
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Content>>;

    async fn find(&self, filter: &ContentFilter, offset: u64, limit: u64) -> AppResult<Vec<Content>>;

    async fn count(&self, filter: &ContentFilter) -> AppResult<u64>;

    async fn create(&self, content: Content) -> AppResult<Content>;

    /// 존재하지 않으면 `NotFound`
    async fn update(&self, content: Content) -> AppResult<Content>;

    /// 삭제되었으면 true
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// 조회수를 원자적으로 1 증가시킵니다. 대상이 없으면 false
    async fn increment_view_count(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB 저장 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentDocument {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    title_es: Option<String>,
    title_pt: Option<String>,
    description: Option<String>,
    description_es: Option<String>,
    description_pt: Option<String>,
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    genre: Vec<String>,
    release_year: i32,
    duration_minutes: Option<i32>,
    thumbnail_url: Option<String>,
    video_url: Option<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    view_count: i64,
    is_published: bool,
    #[serde(default)]
    cast: Vec<String>,
    director: Option<String>,
    production_company: Option<String>,
    season: Option<i32>,
    episode: Option<i32>,
    series_id: Option<String>,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<Content> for ContentDocument {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            title: content.title,
            title_es: content.title_es,
            title_pt: content.title_pt,
            description: content.description,
            description_es: content.description_es,
            description_pt: content.description_pt,
            content_type: content.content_type,
            genre: content.genre,
            release_year: content.release_year,
            duration_minutes: content.duration_minutes,
            thumbnail_url: content.thumbnail_url,
            video_url: content.video_url,
            rating: content.rating,
            view_count: i64::try_from(content.view_count).unwrap_or(i64::MAX),
            is_published: content.is_published,
            cast: content.cast,
            director: content.director,
            production_company: content.production_company,
            season: content.season,
            episode: content.episode,
            series_id: content.series_id,
            created_at: to_bson_datetime(content.created_at),
            updated_at: to_bson_datetime(content.updated_at),
        }
    }
}

impl From<ContentDocument> for Content {
    fn from(document: ContentDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            title_es: document.title_es,
            title_pt: document.title_pt,
            description: document.description,
            description_es: document.description_es,
            description_pt: document.description_pt,
            content_type: document.content_type,
            genre: document.genre,
            release_year: document.release_year,
            duration_minutes: document.duration_minutes,
            thumbnail_url: document.thumbnail_url,
            video_url: document.video_url,
            rating: document.rating,
            view_count: u64::try_from(document.view_count).unwrap_or(0),
            is_published: document.is_published,
            cast: document.cast,
            director: document.director,
            production_company: document.production_company,
            season: document.season,
            episode: document.episode,
            series_id: document.series_id,
            created_at: from_bson_datetime(document.created_at),
            updated_at: from_bson_datetime(document.updated_at),
        }
    }
}

pub struct MongoContentRepository {
    collection: Collection<ContentDocument>,
}

impl MongoContentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(CONTENTS_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let index = |keys: Document, name: &str| {
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().name(name.to_string()).build())
                .build()
        };

        self.collection
            .create_indexes([
                index(doc! { "created_at": -1 }, "created_at_desc"),
                index(doc! { "content_type": 1 }, "content_type"),
                index(doc! { "genre": 1 }, "genre"),
                index(doc! { "view_count": -1 }, "view_count_desc"),
            ])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ContentRepository for MongoContentRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Content>> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id })
            .await?
            .map(Content::from))
    }

    async fn find(&self, filter: &ContentFilter, offset: u64, limit: u64) -> AppResult<Vec<Content>> {
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::ValidationError("limit 값이 너무 큽니다".to_string()))?;

        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(filter.sort_document())
            .skip(offset)
            .limit(limit)
            .await?;

        let documents: Vec<ContentDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Content::from).collect())
    }

    async fn count(&self, filter: &ContentFilter) -> AppResult<u64> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn create(&self, content: Content) -> AppResult<Content> {
        self.collection
            .insert_one(ContentDocument::from(content.clone()))
            .await?;

        Ok(content)
    }

    async fn update(&self, content: Content) -> AppResult<Content> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": content.id.as_str() },
                ContentDocument::from(content.clone()),
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("콘텐츠를 찾을 수 없습니다".to_string()));
        }

        Ok(content)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count > 0)
    }

    async fn increment_view_count(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "view_count": 1_i64 } })
            .await?;

        Ok(result.matched_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &str) -> Content {
        Content::new(title.to_string(), 2020)
    }

    #[test]
    fn test_filter_document_combines_conditions() {
        let filter = ContentFilter {
            content_type: Some(ContentType::Movie),
            genre: Some("thriller".to_string()),
            search: Some("  Parasite ".to_string()),
            published_only: true,
        };

        let query = filter.to_document();

        assert_eq!(query.get_bool("is_published").unwrap(), true);
        assert_eq!(query.get_str("content_type").unwrap(), "movie");
        assert_eq!(query.get_str("genre").unwrap(), "thriller");
        assert_eq!(query.get_array("$or").unwrap().len(), SEARCH_FIELDS.len());
    }

    #[test]
    fn test_search_term_is_regex_escaped() {
        let filter = ContentFilter {
            search: Some("a.b".to_string()),
            ..Default::default()
        };

        let query = filter.to_document();
        let first = query.get_array("$or").unwrap()[0].as_document().unwrap();
        let title = first.get_document("title").unwrap();

        assert_eq!(title.get_str("$regex").unwrap(), "a\\.b");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_sort_depends_on_search() {
        assert!(ContentFilter::published().sort_document().contains_key("created_at"));
        assert!(!ContentFilter::published().sort_document().contains_key("view_count"));

        let search = ContentFilter {
            search: Some("love".to_string()),
            ..Default::default()
        };
        let sort = search.sort_document();
        assert_eq!(sort.keys().next().map(String::as_str), Some("view_count"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = ContentFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(!filter.is_search());
        assert!(!filter.to_document().contains_key("$or"));
    }

    #[test]
    fn test_matches_in_memory() {
        let mut drama = content("Crash Landing on You");
        drama.genre = vec!["romance".to_string()];
        drama.director = Some("Lee Jeong-hyo".to_string());

        let mut hidden = content("Unreleased");
        hidden.is_published = false;

        let by_director = ContentFilter {
            search: Some("jeong".to_string()),
            published_only: true,
            ..Default::default()
        };
        assert!(by_director.matches(&drama));

        let wrong_genre = ContentFilter {
            genre: Some("action".to_string()),
            ..Default::default()
        };
        assert!(!wrong_genre.matches(&drama));

        assert!(!ContentFilter::published().matches(&hidden));
        assert!(ContentFilter::default().matches(&hidden));
    }

    #[test]
    fn test_document_conversion() {
        let mut original = content("Kingdom");
        original.view_count = 42;
        original.content_type = ContentType::Drama;

        let document = bson::to_document(&ContentDocument::from(original.clone())).unwrap();
        assert_eq!(document.get_i64("view_count").unwrap(), 42);
        assert_eq!(document.get_str("content_type").unwrap(), "drama");

        let restored: ContentDocument = bson::from_document(document).unwrap();
        let restored = Content::from(restored);
        assert_eq!(restored.view_count, 42);
        assert_eq!(restored.id, original.id);
    }
}
