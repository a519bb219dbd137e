//! 미디어 카탈로그 서비스 메인 애플리케이션
//!
//! MongoDB, Redis 연결과 서비스 레지스트리를 초기화하고
//! 콘텐츠 카탈로그와 인증 REST API를 제공하는 Actix-web 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use catalog_service_backend::caching::redis::RedisClient;
use catalog_service_backend::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use catalog_service_backend::core::ServiceRegistry;
use catalog_service_backend::db::Database;
use catalog_service_backend::errors::AppResult;
use catalog_service_backend::routes::configure_all_routes;
use catalog_service_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("Catalog Service Backend");
    info!("🚀 카탈로그 서비스 시작중... (환경: {:?})", Environment::current());

    let registry = match initialize_registry().await {
        Ok(registry) => registry,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry).await
}

/// 데이터 스토어 연결 후 레지스트리를 구성합니다.
async fn initialize_registry() -> AppResult<ServiceRegistry> {
    print_step_start(1, "Connecting data stores");
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await?;
    info!("✅ MongoDB 연결 성공: {}", database.database_name());

    let redis_client = RedisClient::new().await?;
    info!("✅ Redis 연결 성공");
    print_step_complete(1, "Data stores connected", 2);

    print_step_start(2, "Building service registry");
    let registry = ServiceRegistry::initialize(&database, redis_client).await?;
    print_step_complete(2, "Service registry ready", 4);

    Ok(registry)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 등록 순서: Rate Limiting → CORS → Logger → 경로 정규화
/// (actix-web은 마지막에 등록한 미들웨어가 요청을 먼저 받습니다)
async fn start_http_server(registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        let registry = registry.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| registry.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // env_logger 초기화 전이므로 표준 출력 사용
    println!("Current profile: {}", profile);

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => println!("{} 파일 로드 됨", file),
        Err(e) => eprintln!("환경 파일 로드 실패 ({}): {}", profile, e),
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
