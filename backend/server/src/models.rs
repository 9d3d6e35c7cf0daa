//! # Payloads
//!
//! JSON shapes exchanged with the frontend. Field names are camelCase on the wire.
use analysis::{SentimentLabel, SentimentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored review. Only `reactions` changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub rating: u8,
    pub pseudonym: String,
    pub avatar: String,
    pub hashtags: Vec<String>,
    pub sentiment: SentimentLabel,
    pub sentiment_score: f64,
    #[serde(default)]
    pub reactions: u64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_url: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_url: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reference to an image hosted elsewhere, stored as given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mimetype: String,
}

/// Submission body. Hashtags and sentiment sent by the client are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub pseudonym: String,
    pub avatar: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub product_name: Option<String>,
    pub product_url: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkRequest {
    pub ids: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub hashtags: Vec<String>,
    pub sentiment: SentimentResult,
}

#[derive(Debug, Serialize)]
pub struct ReactionResponse {
    pub id: u64,
    pub reactions: u64,
}

/// Explore page query string, all parts optional.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub rating: Option<String>,
    pub sentiment: Option<String>,
}

#[cfg(test)]
mod tests {
    use analysis::SentimentLabel;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::{NewReview, Review};

    #[test]
    fn test_review_wire_format() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let review = Review {
            id: 7,
            title: "Solid".to_string(),
            content: "good #Build".to_string(),
            rating: 4,
            pseudonym: "FairJudge12".to_string(),
            avatar: "F".to_string(),
            hashtags: vec!["#Build".to_string()],
            sentiment: SentimentLabel::Positive,
            sentiment_score: 1.0,
            reactions: 3,
            company_name: String::new(),
            company_url: String::new(),
            product_name: "Desk".to_string(),
            product_url: String::new(),
            images: Vec::new(),
            created_at: created,
            updated_at: created,
        };

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["sentiment"], "positive");
        assert_eq!(value["sentimentScore"], 1.0);
        assert_eq!(value["productName"], "Desk");
        assert_eq!(value["createdAt"], "2024-01-15T10:30:00Z");

        let back: Review = serde_json::from_value(value).unwrap();
        assert_eq!(back, review);
    }

    #[test]
    fn test_new_review_ignores_client_analysis() {
        let payload: NewReview = serde_json::from_value(json!({
            "title": "Late",
            "content": "slow #Delivery",
            "rating": 2,
            "pseudonym": "BoldVoice3",
            "hashtags": ["#Fake"],
            "sentiment": "positive",
            "sentimentScore": 0.9,
            "companyName": "Acme"
        }))
        .unwrap();

        assert_eq!(payload.rating, 2);
        assert_eq!(payload.company_name.as_deref(), Some("Acme"));
        assert!(payload.avatar.is_none());
        assert!(payload.images.is_empty());
    }
}
