//! 사용자/인증 API 요청 및 응답 DTO

pub mod request;
pub mod response;
