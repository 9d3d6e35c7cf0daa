//! # Lexicon
//!
//! Fixed word tables used by the sentiment classifier. Lowercase, disjoint,
//! built once and never changed at runtime.
use std::{collections::HashSet, sync::LazyLock};

pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "excellent",
    "fantastic",
    "great",
    "good",
    "wonderful",
    "perfect",
    "outstanding",
    "brilliant",
    "superb",
    "magnificent",
    "marvelous",
    "terrific",
    "fabulous",
    "incredible",
    "phenomenal",
    "remarkable",
    "exceptional",
    "love",
    "like",
    "enjoy",
    "happy",
    "satisfied",
    "pleased",
    "delighted",
    "impressed",
    "recommend",
    "best",
    "quality",
    "fast",
    "quick",
    "easy",
    "helpful",
    "friendly",
    "professional",
    "reliable",
    "efficient",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "awful",
    "terrible",
    "horrible",
    "bad",
    "worst",
    "hate",
    "dislike",
    "disappointed",
    "frustrated",
    "angry",
    "annoyed",
    "upset",
    "disgusted",
    "pathetic",
    "useless",
    "worthless",
    "garbage",
    "trash",
    "junk",
    "slow",
    "expensive",
    "overpriced",
    "cheap",
    "poor",
    "low",
    "broken",
    "defective",
    "faulty",
    "damaged",
    "wrong",
    "error",
    "problem",
    "issue",
    "complaint",
    "refund",
    "return",
    "cancel",
    "avoid",
    "warning",
];

static POSITIVE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());

static NEGATIVE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

pub fn is_positive(word: &str) -> bool {
    POSITIVE.contains(word)
}

pub fn is_negative(word: &str) -> bool {
    NEGATIVE.contains(word)
}
