use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keyword_store::{JsonFileKeywordStore, KeywordStore, MemoryKeywordStore};
use trends_client::TrendsClient;

mod config;
mod rest;

use config::ApiConfig;

pub struct AppState {
    pub trends: TrendsClient,
    pub keywords: Arc<dyn KeywordStore>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("api=info".parse()?)
                .add_directive("trends_client=info".parse()?)
                .add_directive("keyword_store=info".parse()?),
        )
        .init();

    let config = ApiConfig::from_env()?;

    let keywords: Arc<dyn KeywordStore> = match &config.keyword_store_path {
        Some(path) => {
            info!(path = %path.display(), "Using JSON file keyword store");
            Arc::new(JsonFileKeywordStore::new(path))
        }
        None => {
            info!("KEYWORD_STORE_PATH not set, keywords are kept in memory");
            Arc::new(MemoryKeywordStore::new())
        }
    };

    info!(
        baseline = %config.trends.baseline_keyword,
        timeout_secs = config.trends.timeout.as_secs(),
        "Trends client configured"
    );

    let state = Arc::new(AppState {
        trends: TrendsClient::new(config.trends.clone())?,
        keywords,
    });

    let app = rest::router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Keyword trends API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
