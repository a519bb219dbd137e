//! 미디어 카탈로그 서비스 백엔드
//!
//! 드라마, 영화, 뮤직비디오, 예능 카탈로그를 제공하는 REST API 서비스입니다.
//! 이메일/비밀번호 로그인과 Google OAuth 2.0 로그인을 지원하며,
//! 콘텐츠 쓰기 작업은 관리자 역할로 제한됩니다.
//!
//! # Features
//!
//! - **카탈로그**: 유형/장르 필터, 검색, 페이지네이션, 다국어 제목(ko/es/pt/en)
//! - **조회수/평점**: 상세 조회 시 조회수 증가, 0-5 평점 관리
//! - **JWT 인증**: HS256 액세스/리프레시 토큰
//! - **OAuth 2.0**: Google 로그인, 이메일 기준 계정 연결
//! - **MongoDB**: 사용자/콘텐츠 저장
//! - **Redis**: 사용자 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (ServiceRegistry가 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
