//! MongoDB 연결 관리
//!
//! 카탈로그 사용자 컬렉션이 위치한 데이터베이스 핸들을 제공합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017  # 기본값
//! DATABASE_NAME=portal_catalog           # 기본값
//! ```

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "portal_catalog".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("google_auth_provider".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
