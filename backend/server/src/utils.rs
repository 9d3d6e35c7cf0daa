use analysis::{SentimentLabel, analyze_sentiment, extract_hashtags, generate_avatar};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::{
    error::AppError::{self, MalformedPayload},
    models::{NewReview, Review, SearchParams},
};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

const ALL: &str = "all";

pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| MalformedPayload(e.to_string()))
}

/// Trims and checks a submission, filling in the avatar when missing.
pub fn validate_review(payload: NewReview) -> Result<NewReview, AppError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(MalformedPayload("title is required".to_string()));
    }

    if payload.content.trim().is_empty() {
        return Err(MalformedPayload("content is required".to_string()));
    }

    if !(MIN_RATING..=MAX_RATING).contains(&payload.rating) {
        return Err(MalformedPayload(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }

    let pseudonym = payload.pseudonym.trim().to_string();
    if pseudonym.is_empty() {
        return Err(MalformedPayload("pseudonym is required".to_string()));
    }

    let avatar = payload
        .avatar
        .map(|avatar| avatar.trim().to_string())
        .filter(|avatar| !avatar.is_empty())
        .unwrap_or_else(|| generate_avatar(&pseudonym));

    Ok(NewReview {
        title,
        pseudonym,
        avatar: Some(avatar),
        company_name: trimmed(payload.company_name),
        company_url: trimmed(payload.company_url),
        product_name: trimmed(payload.product_name),
        product_url: trimmed(payload.product_url),
        ..payload
    })
}

fn trimmed(field: Option<String>) -> Option<String> {
    Some(field.as_deref().unwrap_or_default().trim().to_string())
}

/// Runs the text analysis over a validated submission and produces the stored record.
pub fn build_review(payload: NewReview, id: u64, now: DateTime<Utc>) -> Review {
    let hashtags = extract_hashtags(&payload.content);
    let sentiment = analyze_sentiment(&payload.content);

    let avatar = payload
        .avatar
        .unwrap_or_else(|| generate_avatar(&payload.pseudonym));

    Review {
        id,
        title: payload.title,
        content: payload.content,
        rating: payload.rating.clamp(MIN_RATING, MAX_RATING) as u8,
        pseudonym: payload.pseudonym,
        avatar,
        hashtags,
        sentiment: sentiment.label,
        sentiment_score: sentiment.score,
        reactions: 0,
        company_name: payload.company_name.unwrap_or_default(),
        company_url: payload.company_url.unwrap_or_default(),
        product_name: payload.product_name.unwrap_or_default(),
        product_url: payload.product_url.unwrap_or_default(),
        images: payload.images,
        created_at: now,
        updated_at: now,
    }
}

/// Explore page filters after parsing the query string.
#[derive(Debug, Default, PartialEq)]
pub struct ExploreFilter {
    pub query: String,
    pub min_rating: Option<u8>,
    pub sentiment: Option<SentimentLabel>,
}

impl ExploreFilter {
    /// Meilisearch filter expression, `None` when nothing is filtered.
    pub fn filter_expression(&self) -> Option<String> {
        let mut clauses = Vec::new();

        if let Some(rating) = self.min_rating {
            clauses.push(format!("rating >= {rating}"));
        }

        if let Some(sentiment) = self.sentiment {
            clauses.push(format!("sentiment = \"{sentiment}\""));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" AND "))
        }
    }
}

impl TryFrom<SearchParams> for ExploreFilter {
    type Error = AppError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let query = params.q.unwrap_or_default().trim().to_string();

        let min_rating = match selected(params.rating) {
            Some(raw) => {
                let rating: i64 = raw
                    .parse()
                    .map_err(|_| MalformedPayload(format!("invalid rating filter {raw:?}")))?;

                if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                    return Err(MalformedPayload(format!("invalid rating filter {raw:?}")));
                }

                Some(rating as u8)
            }
            None => None,
        };

        let sentiment = match selected(params.sentiment) {
            Some(raw) => Some(raw.parse::<SentimentLabel>().map_err(MalformedPayload)?),
            None => None,
        };

        Ok(Self {
            query,
            min_rating,
            sentiment,
        })
    }
}

/// `None` for a missing, blank or `all` filter.
fn selected(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_lowercase())
        .filter(|raw| !raw.is_empty() && raw != ALL)
}
