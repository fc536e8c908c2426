//! Google 인증 프로바이더 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 Google 프로바이더를 조립합니다.
//! Google 자격 증명이 없으면 경고를 남기고 헬스체크만 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use google_auth_provider::caching::redis::RedisClient;
use google_auth_provider::config::{
    Environment, GoogleOAuthConfig, IdentityConfig, JwtConfig, OAuthConfig, RateLimitConfig, ServerConfig,
};
use google_auth_provider::db::Database;
use google_auth_provider::repositories::identity::CatalogIdentityDirectory;
use google_auth_provider::routes::configure_all_routes;
use google_auth_provider::services::auth::{
    GoogleAuthProvider, GoogleHandshake, IdentityResolver, IdentityTokenService, LogWarningSink,
    SessionResponseBuilder,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Google 인증 프로바이더 시작중... (environment: {})", Environment::current().as_str());

    let provider = match GoogleOAuthConfig::from_env() {
        Ok(google_config) => Some(web::Data::new(build_google_provider(google_config).await?)),
        Err(err) => {
            warn!("Skipping google auth provider, {}", err);
            None
        }
    };

    start_http_server(provider).await
}

/// Google 프로바이더와 협력 객체를 조립합니다
///
/// MongoDB 연결 실패는 기동 실패로 처리하고, Redis 연결 실패는 캐시 없이 진행합니다.
async fn build_google_provider(google_config: GoogleOAuthConfig) -> io::Result<GoogleAuthProvider> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?);

    let redis_client = match RedisClient::new().await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Redis 연결 실패, 아이덴티티 캐시 없이 진행합니다: {}", e);
            None
        }
    };

    let identity_config = IdentityConfig::from_env();
    let namespace = identity_config.namespace.clone();
    let directory = Arc::new(CatalogIdentityDirectory::new(database, redis_client, identity_config));

    if let Err(e) = directory.create_indexes().await {
        warn!("카탈로그 인덱스 생성 실패: {}", e);
    }

    let resolver = Arc::new(IdentityResolver::new(directory, Arc::new(LogWarningSink)));

    info!("✅ Google 인증 프로바이더 등록: {}", google_config.callback_url);

    Ok(GoogleAuthProvider::new(
        Arc::new(GoogleHandshake::new(google_config)),
        SessionResponseBuilder::new(resolver),
        IdentityTokenService::new(JwtConfig::from_env(), namespace),
        OAuthConfig::from_env(),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limit 설정 또는 서버 실행 오류
async fn start_http_server(provider: Option<web::Data<GoogleAuthProvider>>) -> io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();
    let app_origin = OAuthConfig::from_env().app_origin;

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let google_enabled = provider.is_some();

        let mut app = App::new();
        if let Some(provider) = &provider {
            app = app.app_data(provider.clone());
        }

        app
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&app_origin))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, google_enabled))
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
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

    match profile.as_str() {
        "prod" => { let _ = dotenv::from_filename(".env.prod"); }
        "dev" => { let _ = dotenv::from_filename(".env.dev"); }
        _ => { dotenv().ok(); }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 기본값은 `info,actix_web=info` 입니다.
///
/// ```bash
/// RUST_LOG=google_auth_provider::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 프론트엔드 오리진을 허용하는 CORS 설정
fn configure_cors(app_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(app_origin)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        // 리프레시 쿠키 전달
        .supports_credentials()
        .max_age(3600)
}
