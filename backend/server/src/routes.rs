use std::sync::Arc;

use analysis::{
    Identity, TrendingTagStat, analyze_sentiment, extract_hashtags, hashtags::tag_from_slug,
    trending_tags,
};
use axum::{
    Json,
    body::Bytes,
    extract::{self, Path, Query},
    http::StatusCode,
};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
    database::{
        all_hashtag_lists, bookmarked_reviews, get_reviews, increment_reactions, insert_review,
        latest_reviews, next_review_id, reviews_by_tag,
    },
    error::AppError,
    models::{
        AnalyzeRequest, AnalyzeResponse, BookmarkRequest, ReactionResponse, Review, SearchParams,
    },
    search::{index_review, search_review_ids},
    state::State,
    utils::{ExploreFilter, build_review, parse_json, validate_review},
};

type Shared = extract::State<Arc<State>>;

pub async fn latest_reviews_handler(
    extract::State(state): Shared,
) -> Result<Json<Vec<Review>>, AppError> {
    let mut conn = state.redis_connection.clone();

    Ok(Json(latest_reviews(&mut conn).await?))
}

pub async fn create_review_handler(
    extract::State(state): Shared,
    body: Bytes,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let payload = validate_review(parse_json(&body)?)?;

    let mut conn = state.redis_connection.clone();
    let id = next_review_id(&mut conn).await?;

    let review = build_review(payload, id, Utc::now());
    insert_review(&mut conn, &review).await?;

    info!(
        "Review {} created with {} hashtags, {} sentiment",
        review.id,
        review.hashtags.len(),
        review.sentiment
    );

    if let Err(e) = index_review(&state.meili_client, &review).await {
        warn!("Failed to index review {}: {e}", review.id);
    }

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn bookmarked_reviews_handler(
    extract::State(state): Shared,
    body: Bytes,
) -> Result<Json<Vec<Review>>, AppError> {
    let request: BookmarkRequest = parse_json(&body)?;

    let mut conn = state.redis_connection.clone();

    Ok(Json(bookmarked_reviews(&mut conn, &request.ids).await?))
}

pub async fn tag_reviews_handler(
    extract::State(state): Shared,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let tag = tag_from_slug(&slug);
    debug!("Fetching reviews for {tag}");

    let mut conn = state.redis_connection.clone();

    Ok(Json(reviews_by_tag(&mut conn, &tag).await?))
}

pub async fn trending_handler(
    extract::State(state): Shared,
) -> Result<Json<Vec<TrendingTagStat>>, AppError> {
    let mut conn = state.redis_connection.clone();
    let hashtag_lists = all_hashtag_lists(&mut conn).await?;

    Ok(Json(trending_tags(hashtag_lists)))
}

pub async fn reactions_handler(
    extract::State(state): Shared,
    Path(id): Path<u64>,
) -> Result<Json<ReactionResponse>, AppError> {
    let mut conn = state.redis_connection.clone();
    let reactions = increment_reactions(&mut conn, id).await?;

    Ok(Json(ReactionResponse { id, reactions }))
}

pub async fn search_handler(
    extract::State(state): Shared,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Review>>, AppError> {
    let filter = ExploreFilter::try_from(params)?;
    let ids = search_review_ids(&state.meili_client, &filter).await?;

    let mut conn = state.redis_connection.clone();

    Ok(Json(get_reviews(&mut conn, &ids).await?))
}

pub async fn analyze_handler(body: Bytes) -> Result<Json<AnalyzeResponse>, AppError> {
    let request: AnalyzeRequest = parse_json(&body)?;

    Ok(Json(AnalyzeResponse {
        hashtags: extract_hashtags(&request.content),
        sentiment: analyze_sentiment(&request.content),
    }))
}

pub async fn pseudonym_handler() -> Json<Identity> {
    Json(Identity::generate())
}
