use serde::{Deserialize, Serialize};

pub const REVIEWS_PATH: &str = "/reviews";
pub const PSEUDONYM_PATH: &str = "/pseudonym";

/// One entry of the sample file. Missing pseudonyms are generated by the server.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleReview {
    pub title: String,
    pub content: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudonym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

#[derive(Deserialize)]
pub struct Identity {
    pub pseudonym: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub id: u64,
    pub hashtags: Vec<String>,
    pub sentiment: String,
    pub sentiment_score: f64,
}
