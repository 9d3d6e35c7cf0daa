//! # Trending Tags
//!
//! Frequency of every hashtag across all stored reviews.
//!
//! - Each review contributes each of its own tags once
//! - The same tag on different reviews counts every time
//! - `percent` is the share of all tag occurrences, rounded to one decimal
//! - Sorted by count descending, equal counts by tag ascending
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendingTagStat {
    pub tag: String,
    pub count: u64,
    pub percent: f64,
}

pub fn trending_tags<I, T, S>(hashtag_lists: I) -> Vec<TrendingTagStat>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    for tag in hashtag_lists.into_iter().flatten() {
        let tag = tag.as_ref();

        match counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                counts.insert(tag.to_string(), 1);
            }
        }
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<TrendingTagStat> = counts
        .into_iter()
        .map(|(tag, count)| TrendingTagStat {
            tag,
            count,
            percent: round_tenth(count as f64 / total as f64 * 100.0),
        })
        .collect();

    // stable, so ties keep the map's ascending tag order
    stats.sort_by(|a, b| b.count.cmp(&a.count));

    stats
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{TrendingTagStat, trending_tags};

    fn stat(tag: &str, count: u64, percent: f64) -> TrendingTagStat {
        TrendingTagStat {
            tag: tag.to_string(),
            count,
            percent,
        }
    }

    #[test]
    fn test_basic() {
        let reviews = vec![vec!["#A", "#B"], vec!["#A"]];

        assert_eq!(
            trending_tags(reviews),
            vec![stat("#A", 2, 66.7), stat("#B", 1, 33.3)]
        );
    }

    #[test]
    fn test_empty() {
        assert!(trending_tags(Vec::<Vec<String>>::new()).is_empty());
        assert!(trending_tags(vec![Vec::<String>::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn test_ties_sorted_by_tag() {
        let reviews = vec![vec!["#zeta", "#alpha"], vec!["#mid"], vec!["#zeta", "#alpha", "#mid"]];

        let tags: Vec<String> = trending_tags(reviews).into_iter().map(|s| s.tag).collect();
        assert_eq!(tags, vec!["#alpha", "#mid", "#zeta"]);
    }

    #[test]
    fn test_case_sensitive_groups() {
        let reviews = vec![vec!["#Service"], vec!["#service"], vec!["#Service"]];

        assert_eq!(
            trending_tags(reviews),
            vec![stat("#Service", 2, 66.7), stat("#service", 1, 33.3)]
        );
    }

    #[test]
    fn test_percentages() {
        let reviews = vec![
            vec!["#a".to_string(), "#b".to_string(), "#c".to_string()],
            vec!["#a".to_string(), "#b".to_string()],
            vec!["#a".to_string()],
            vec!["#d".to_string()],
            vec!["#a".to_string()],
            vec!["#e".to_string()],
            vec!["#f".to_string()],
        ];

        let stats = trending_tags(&reviews);
        assert_eq!(stats[0], stat("#a", 4, 40.0));
        assert_eq!(stats[1], stat("#b", 2, 20.0));
        assert_eq!(stats[2], stat("#c", 1, 10.0));
        assert_eq!(stats.len(), 6);
        assert_eq!(stats.iter().map(|s| s.count).sum::<u64>(), 10);
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(trending_tags(vec![vec!["#only"]]), vec![stat("#only", 1, 100.0)]);
    }
}
