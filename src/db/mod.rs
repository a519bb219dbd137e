//! MongoDB 연결 관리
//!
//! 서버 기동 시 한 번 연결하고 ping으로 접속을 확인합니다.
//! `Database`는 내부적으로 커넥션 풀을 가진 `Client`를 감싸므로 clone 비용이 작습니다.

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DataStoreConfig;
use crate::errors::errors::AppResult;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정(`MONGODB_URI`, `DATABASE_NAME`)으로 연결합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DataStoreConfig::mongodb_uri(), &DataStoreConfig::database_name()).await
    }

    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("catalog_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
