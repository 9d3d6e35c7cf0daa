//! # Redis
//!
//! Primary store for reviews.
//!
//! ## Requirements
//!
//! - Newest-first listing, capped at 50
//! - Lookup by a set of ids (bookmarks) and by exact hashtag
//! - Atomic reaction counters
//! - Full scan of every review for trending tags, fine at this volume
//!
//! ## Implementation
//!
//! - `reviews:next_id`: counter, `INCR` hands out ids
//! - `reviews`: hash, id to record JSON
//! - `reviews:created`: sorted set, id scored by creation millis
//! - `reviews:tag:{tag}`: sorted set per hashtag, same scoring
//! - `reviews:reactions`: hash, id to count, only ever `HINCRBY`
//! - A new record and all of its index entries go in one `MULTI` pipeline
//! - Records are immutable once written, reaction counts are merged in on read
use std::{cmp::Reverse, collections::HashSet, time::Duration};

use redis::{
    AsyncCommands, Client, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::{error::AppError, models::Review};

pub const REVIEWS_KEY: &str = "reviews";
pub const REVIEWS_BY_CREATED_KEY: &str = "reviews:created";
pub const REVIEWS_NEXT_ID_KEY: &str = "reviews:next_id";
pub const REACTIONS_KEY: &str = "reviews:reactions";
pub const TAG_KEY_PREFIX: &str = "reviews:tag:";

pub const LATEST_LIMIT: isize = 50;

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, RedisError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;

    client.get_connection_manager_with_config(config).await
}

pub fn tag_key(tag: &str) -> String {
    format!("{TAG_KEY_PREFIX}{tag}")
}

pub async fn next_review_id(conn: &mut ConnectionManager) -> Result<u64, AppError> {
    let id: u64 = conn.incr(REVIEWS_NEXT_ID_KEY, 1).await?;

    Ok(id)
}

pub async fn insert_review(conn: &mut ConnectionManager, review: &Review) -> Result<(), AppError> {
    let record = serde_json::to_string(review)?;
    let score = review.created_at.timestamp_millis();

    let mut pipe = redis::pipe();
    pipe.atomic()
        .hset(REVIEWS_KEY, review.id, record)
        .ignore()
        .zadd(REVIEWS_BY_CREATED_KEY, review.id, score)
        .ignore();

    for tag in &review.hashtags {
        pipe.zadd(tag_key(tag), review.id, score).ignore();
    }

    let _: () = pipe.query_async(conn).await?;

    Ok(())
}

pub async fn latest_reviews(conn: &mut ConnectionManager) -> Result<Vec<Review>, AppError> {
    let ids: Vec<u64> = conn
        .zrevrange(REVIEWS_BY_CREATED_KEY, 0, LATEST_LIMIT - 1)
        .await?;

    get_reviews(conn, &ids).await
}

pub async fn reviews_by_tag(conn: &mut ConnectionManager, tag: &str) -> Result<Vec<Review>, AppError> {
    let ids: Vec<u64> = conn.zrevrange(tag_key(tag), 0, -1).await?;

    get_reviews(conn, &ids).await
}

pub async fn bookmarked_reviews(
    conn: &mut ConnectionManager,
    ids: &[u64],
) -> Result<Vec<Review>, AppError> {
    let mut seen = HashSet::new();
    let unique: Vec<u64> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

    let mut reviews = get_reviews(conn, &unique).await?;
    newest_first(&mut reviews);

    Ok(reviews)
}

/// Records for `ids` in the given order, unknown ids skipped.
pub async fn get_reviews(conn: &mut ConnectionManager, ids: &[u64]) -> Result<Vec<Review>, AppError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<Option<String>> = redis::cmd("HMGET")
        .arg(REVIEWS_KEY)
        .arg(ids)
        .query_async(&mut *conn)
        .await?;

    let reactions: Vec<Option<u64>> = redis::cmd("HMGET")
        .arg(REACTIONS_KEY)
        .arg(ids)
        .query_async(conn)
        .await?;

    collect_reviews(records, reactions)
}

pub async fn all_reviews(conn: &mut ConnectionManager) -> Result<Vec<Review>, AppError> {
    let records: Vec<String> = conn.hvals(REVIEWS_KEY).await?;

    records.iter().map(|record| parse_review(record)).collect()
}

pub async fn all_hashtag_lists(conn: &mut ConnectionManager) -> Result<Vec<Vec<String>>, AppError> {
    let reviews = all_reviews(conn).await?;

    Ok(reviews.into_iter().map(|review| review.hashtags).collect())
}

pub async fn increment_reactions(conn: &mut ConnectionManager, id: u64) -> Result<u64, AppError> {
    let exists: bool = conn.hexists(REVIEWS_KEY, id).await?;
    if !exists {
        return Err(AppError::NotFound(id));
    }

    let reactions: u64 = conn.hincr(REACTIONS_KEY, id, 1).await?;

    Ok(reactions)
}

fn parse_review(record: &str) -> Result<Review, AppError> {
    Ok(serde_json::from_str(record)?)
}

fn collect_reviews(
    records: Vec<Option<String>>,
    reactions: Vec<Option<u64>>,
) -> Result<Vec<Review>, AppError> {
    records
        .into_iter()
        .zip(reactions.into_iter().chain(std::iter::repeat(None)))
        .filter_map(|(record, reactions)| record.map(|record| (record, reactions)))
        .map(|(record, reactions)| {
            let mut review = parse_review(&record)?;
            review.reactions = reactions.unwrap_or(0);

            Ok(review)
        })
        .collect()
}

pub fn newest_first(reviews: &mut [Review]) {
    reviews.sort_by_key(|review| Reverse(review.created_at));
}

#[cfg(test)]
mod tests {
    use analysis::SentimentLabel;
    use chrono::{Duration, TimeZone, Utc};

    use super::{collect_reviews, newest_first, tag_key};
    use crate::models::Review;

    fn review(id: u64, minutes: i64) -> Review {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);

        Review {
            id,
            title: format!("Review {id}"),
            content: "fine".to_string(),
            rating: 3,
            pseudonym: "PlainUser1".to_string(),
            avatar: "P".to_string(),
            hashtags: Vec::new(),
            sentiment: SentimentLabel::Neutral,
            sentiment_score: 0.5,
            reactions: 0,
            company_name: String::new(),
            company_url: String::new(),
            product_name: String::new(),
            product_url: String::new(),
            images: Vec::new(),
            created_at: created,
            updated_at: created,
        }
    }

    fn record(id: u64, minutes: i64) -> Option<String> {
        Some(serde_json::to_string(&review(id, minutes)).unwrap())
    }

    #[test]
    fn test_tag_key() {
        assert_eq!(tag_key("#Service"), "reviews:tag:#Service");
    }

    #[test]
    fn test_collect_skips_missing() {
        let reviews = collect_reviews(
            vec![record(1, 0), None, record(3, 2)],
            vec![Some(4), Some(1), None],
        )
        .unwrap();

        let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(reviews[0].reactions, 4);
        assert_eq!(reviews[1].reactions, 0);
    }

    #[test]
    fn test_collect_rejects_corrupt_record() {
        assert!(collect_reviews(vec![Some("{".to_string())], vec![None]).is_err());
    }

    #[test]
    fn test_newest_first() {
        let mut reviews = vec![review(1, 0), review(2, 30), review(3, 10)];
        newest_first(&mut reviews);

        let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
