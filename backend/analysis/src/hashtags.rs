//! # Hashtags
//!
//! A hashtag is `#` followed by one or more word characters. Case is kept as
//! typed, so `#Service` and `#service` are different tags.
use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").unwrap());

/// Every hashtag in `text`, duplicates dropped, in order of first appearance.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    HASHTAG
        .find_iter(text)
        .map(|found| found.as_str())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}

/// Turns a tag page slug into the stored hashtag form.
pub fn tag_from_slug(slug: &str) -> String {
    format!("#{}", slug.trim_start_matches('#'))
}

#[cfg(test)]
mod tests {
    use super::{extract_hashtags, tag_from_slug};

    #[test]
    fn test_no_hashtags() {
        assert!(extract_hashtags("").is_empty());
        assert!(extract_hashtags("plain words, no tags here").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(extract_hashtags("#Great #Great"), vec!["#Great"]);
        assert_eq!(extract_hashtags("#a #b #a #c #b"), vec!["#a", "#b", "#c"]);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(
            extract_hashtags("Loved the #Service and the #service"),
            vec!["#Service", "#service"]
        );
    }

    #[test]
    fn test_lone_hash() {
        assert!(extract_hashtags("# #! ##").is_empty());
        assert_eq!(extract_hashtags("## #ok"), vec!["#ok"]);
    }

    #[test]
    fn test_greedy_match() {
        assert_eq!(extract_hashtags("#one#two"), vec!["#one", "#two"]);
        assert_eq!(extract_hashtags("#fast_ship, #5stars!"), vec!["#fast_ship", "#5stars"]);
        assert_eq!(extract_hashtags("mid#word"), vec!["#word"]);
    }

    #[test]
    fn test_ascii_word_characters() {
        assert_eq!(extract_hashtags("#café"), vec!["#caf"]);
        assert!(extract_hashtags("#ñ").is_empty());
    }

    #[test]
    fn test_tag_from_slug() {
        assert_eq!(tag_from_slug("BuildQuality"), "#BuildQuality");
        assert_eq!(tag_from_slug("#BuildQuality"), "#BuildQuality");
    }
}
