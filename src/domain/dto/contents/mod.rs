//! 콘텐츠 카탈로그 API 요청 및 응답 DTO

pub mod request;
pub mod response;

pub use request::{ContentListQuery, CreateContentRequest, UpdateContentRequest};
pub use response::{ContentListResponse, ContentResponse};
