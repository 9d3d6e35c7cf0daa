use std::sync::Arc;

use anyhow::{Context, Result};
use meilisearch_sdk::client::Client;
use redis::aio::ConnectionManager;
use tracing::info;

use super::{
    config::Config,
    database::{all_reviews, init_redis},
    search::init_meilisearch,
};

pub struct State {
    pub config: Config,
    pub redis_connection: ConnectionManager,
    pub meili_client: Arc<Client>,
}

impl State {
    pub async fn new() -> Result<Arc<Self>> {
        let config = Config::load()?;

        let mut redis_connection = init_redis(&config.redis_url)
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", config.redis_url))?;

        let reviews = all_reviews(&mut redis_connection).await?;
        info!("Loaded {} reviews from Redis", reviews.len());

        let meili_client = init_meilisearch(&config.meili_url, &config.meili_key, &reviews)
            .await
            .with_context(|| format!("Failed to initialize Meilisearch at {}", config.meili_url))?;

        Ok(Arc::new(Self {
            config,
            redis_connection,
            meili_client,
        }))
    }
}
