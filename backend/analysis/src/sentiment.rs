//! # Sentiment
//!
//! Word-counting classifier over the [lexicon](crate::lexicon).
//!
//! ## Scoring
//!
//! - Lowercase, then split on every run of non-word characters
//! - `T` is the raw number of pieces, empty ones included, so `"#great"` is
//!   `["", "great"]` and counts as two tokens
//! - `P` and `N` are positive and negative hits
//! - Positive wins when `P/T > N/T` and `P > 0`, score `min(5P/T, 1)`
//! - Negative wins when `N/T > P/T` and `N > 0`, score `min(5N/T, 1)`
//! - Anything else is neutral at exactly `0.5`
use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::{is_negative, is_positive};

pub const NEUTRAL_SCORE: f64 = 0.5;
const SCALE: f64 = 5.0;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(format!("unknown sentiment {other:?}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: NEUTRAL_SCORE,
        }
    }
}

pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();

    let mut total = 0usize;
    let mut positive = 0usize;
    let mut negative = 0usize;

    for word in SEPARATOR.split(&lowered) {
        total += 1;

        if is_positive(word) {
            positive += 1;
        } else if is_negative(word) {
            negative += 1;
        }
    }

    let (positive_ratio, negative_ratio) = match total {
        0 => (0.0, 0.0),
        n => (positive as f64 / n as f64, negative as f64 / n as f64),
    };

    if positive_ratio > negative_ratio && positive > 0 {
        SentimentResult {
            label: SentimentLabel::Positive,
            score: (positive_ratio * SCALE).min(1.0),
        }
    } else if negative_ratio > positive_ratio && negative > 0 {
        SentimentResult {
            label: SentimentLabel::Negative,
            score: (negative_ratio * SCALE).min(1.0),
        }
    } else {
        SentimentResult::neutral()
    }
}
