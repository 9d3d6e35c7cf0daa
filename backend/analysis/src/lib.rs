//! # Review Analysis
//!
//! Lexical text analysis shared by the server and anything else that needs to
//! read review text.
//!
//! ## Pipeline
//!
//! - Review text goes through the **hashtag extractor** and the **sentiment classifier**
//! - Neither depends on the other, run them in any order
//! - Both results are written onto the review record once, at creation
//! - Later, the **trending aggregator** scans every stored hashtag list and ranks tags
//!
//! Everything here is pure and synchronous. No I/O, no shared mutable state,
//! so handlers can call into it from as many tasks as they like.
//!
//!
//!
//! ## Notes
//!
//! ### Word characters
//! Both the extractor and the tokenizer treat only `[A-Za-z0-9_]` as word
//! characters. Accented letters, emoji and the like act as separators.
//!
//! ### Example
//! ```
//! use analysis::{SentimentLabel, analyze_sentiment, extract_hashtags};
//!
//! let text = "Great #Support, would #recommend";
//!
//! assert_eq!(extract_hashtags(text), vec!["#Support", "#recommend"]);
//! assert_eq!(analyze_sentiment(text).label, SentimentLabel::Positive);
//! ```
pub mod hashtags;
pub mod lexicon;
pub mod pseudonym;
pub mod sentiment;
pub mod trending;

pub use hashtags::extract_hashtags;
pub use pseudonym::{Identity, generate_avatar, generate_pseudonym};
pub use sentiment::{SentimentLabel, SentimentResult, analyze_sentiment};
pub use trending::{TrendingTagStat, trending_tags};
