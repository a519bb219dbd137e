pub mod content_repo;

pub use content_repo::{ContentFilter, ContentRepository, MongoContentRepository};
