//! # Core Module
//!
//! ### [`registry`] - 서비스 조립
//! - **ServiceRegistry**: 리포지토리와 서비스를 생성 시점에 한 번 연결
//! - **app_data 등록**: 각 서비스를 `web::Data`로 핸들러에 공유
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::initialize(&database, redis_client).await?;
//!
//! HttpServer::new(move || {
//!     let registry = registry.clone();
//!     App::new()
//!         .configure(|cfg| registry.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod registry;

pub use registry::ServiceRegistry;
