//! # Meilisearch
//!
//! Search engine behind the explore page.
//!
//!
//!
//! ## Schema
//! - Index for all reviews
//! - Fields: id (**int**), title (**string**), content (**string**), hashtags (**string list**),
//!   rating (**int**), sentiment (**string**), created (**int**, unix millis)
//!
//!
//!
//! ## Sync
//! - Redis is the source of truth
//! - On startup every stored review is upserted again, so a wiped index heals itself
//! - New reviews are queued for indexing right after they are written to Redis
//! - A failed index call does not fail the submission, the next startup catches it up
//!
//!
//!
//! ## Proxy
//! The frontend never talks to Meilisearch directly. We forward the explore query,
//! take the matching ids in ranked order, and load the full records from Redis so
//! reaction counts are live rather than whatever was last indexed.
//!
//!
//!
//! ## Commands
//!
//! Grab relevant keys.
//! ```sh
//! curl -H "Authorization: Bearer $(cat /run/secrets/MEILI_MASTER_KEY)" http://localhost:7700/keys
//! ```
use std::sync::Arc;

use analysis::SentimentLabel;
use meilisearch_sdk::{client::Client, settings::Settings};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::AppError, models::Review, utils::ExploreFilter};

pub const REVIEW_INDEX: &str = "reviews";
pub const REVIEW_ID: &str = "id";
pub const REVIEW_TITLE: &str = "title";
pub const REVIEW_CONTENT: &str = "content";
pub const REVIEW_HASHTAGS: &str = "hashtags";
pub const REVIEW_RATING: &str = "rating";
pub const REVIEW_SENTIMENT: &str = "sentiment";
pub const REVIEW_CREATED: &str = "created";

pub const SEARCH_LIMIT: usize = 50;

const NEWEST_FIRST: &str = "created:desc";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MeiliReview {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub rating: u8,
    pub sentiment: SentimentLabel,
    pub created: i64,
}

impl From<&Review> for MeiliReview {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            title: review.title.clone(),
            content: review.content.clone(),
            hashtags: review.hashtags.clone(),
            rating: review.rating,
            sentiment: review.sentiment,
            created: review.created_at.timestamp_millis(),
        }
    }
}

pub async fn init_meilisearch(
    meili_url: &str,
    meili_admin_key: &str,
    reviews: &[Review],
) -> Result<Arc<Client>, AppError> {
    let meili_client = Arc::new(Client::new(meili_url, Some(meili_admin_key))?);

    meili_client
        .index(REVIEW_INDEX)
        .set_settings(&init_settings())
        .await?;

    upsert_reviews(&meili_client, reviews).await?;

    info!("Indexed {} reviews", reviews.len());

    Ok(meili_client)
}

/// Upserts and waits for Meilisearch to finish.
pub async fn upsert_reviews(meili_client: &Client, reviews: &[Review]) -> Result<(), AppError> {
    if reviews.is_empty() {
        return Ok(());
    }

    let documents: Vec<MeiliReview> = reviews.iter().map(MeiliReview::from).collect();

    let _result = meili_client
        .index(REVIEW_INDEX)
        .add_or_update(&documents, Some(REVIEW_ID))
        .await?
        .wait_for_completion(meili_client, None, None)
        .await?;

    #[cfg(feature = "verbose")]
    info!("Meili task result: {:?}", _result);

    Ok(())
}

/// Queues a single review without waiting on the task.
pub async fn index_review(meili_client: &Client, review: &Review) -> Result<(), AppError> {
    let _task = meili_client
        .index(REVIEW_INDEX)
        .add_or_update(&[MeiliReview::from(review)], Some(REVIEW_ID))
        .await?;

    #[cfg(feature = "verbose")]
    info!("Meili task queued: {:?}", _task);

    Ok(())
}

/// Ids of matching reviews in ranked order. An empty query lists newest first.
pub async fn search_review_ids(
    meili_client: &Client,
    filter: &ExploreFilter,
) -> Result<Vec<u64>, AppError> {
    let index = meili_client.index(REVIEW_INDEX);
    let expression = filter.filter_expression();
    let sort = [NEWEST_FIRST];

    let mut query = index.search();
    query.with_query(&filter.query).with_limit(SEARCH_LIMIT);

    if let Some(expression) = &expression {
        query.with_filter(expression);
    }

    if filter.query.is_empty() {
        query.with_sort(&sort);
    }

    let results = query.execute::<MeiliReview>().await?;

    Ok(results.hits.into_iter().map(|hit| hit.result.id).collect())
}

fn init_settings() -> Settings {
    Settings::new()
        .with_ranking_rules([
            "words",
            "typo",
            "proximity",
            "attribute",
            "sort",
            "exactness",
        ])
        .with_searchable_attributes([REVIEW_TITLE, REVIEW_CONTENT, REVIEW_HASHTAGS])
        .with_filterable_attributes([REVIEW_RATING, REVIEW_SENTIMENT])
        .with_sortable_attributes([REVIEW_CREATED])
}
