//! # Pseudonyms
//!
//! There are no accounts. A visitor posts under a generated name the client keeps
//! locally, e.g. `CandidCritic42`, with its first letter as the avatar glyph.
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

const ADJECTIVES: &[&str] = &[
    "Anonymous",
    "Honest",
    "Truthful",
    "Genuine",
    "Candid",
    "Frank",
    "Direct",
    "Sincere",
    "Real",
    "Authentic",
    "Transparent",
    "Open",
    "Straight",
    "Plain",
    "Clear",
    "Bold",
    "Brave",
    "Fair",
    "Just",
    "Wise",
    "Smart",
    "Clever",
];

const NOUNS: &[&str] = &[
    "Reviewer",
    "Voice",
    "Opinion",
    "Critic",
    "Judge",
    "Observer",
    "Witness",
    "User",
    "Customer",
    "Buyer",
    "Consumer",
    "Client",
    "Person",
    "Individual",
    "Member",
    "Participant",
    "Contributor",
    "Evaluator",
    "Assessor",
    "Analyst",
];

const DEFAULT_AVATAR: &str = "A";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub pseudonym: String,
    pub avatar: String,
}

impl Identity {
    pub fn generate() -> Self {
        let pseudonym = generate_pseudonym();
        let avatar = generate_avatar(&pseudonym);

        Self { pseudonym, avatar }
    }
}

pub fn generate_pseudonym() -> String {
    let mut rng = rand::thread_rng();

    let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Anonymous");
    let noun = NOUNS.choose(&mut rng).copied().unwrap_or("Reviewer");
    let number: u32 = rng.gen_range(1..=999);

    format!("{adjective}{noun}{number}")
}

pub fn generate_avatar(pseudonym: &str) -> String {
    pseudonym
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ADJECTIVES, Identity, NOUNS, generate_avatar, generate_pseudonym};

    #[test]
    fn test_pseudonym_shape() {
        for _ in 0..200 {
            let pseudonym = generate_pseudonym();

            let adjective = ADJECTIVES
                .iter()
                .find(|a| pseudonym.starts_with(*a))
                .expect("adjective prefix");
            let rest = &pseudonym[adjective.len()..];

            let noun = NOUNS
                .iter()
                .find(|n| rest.starts_with(*n))
                .expect("noun after adjective");
            let number: u32 = rest[noun.len()..].parse().expect("numeric suffix");

            assert!((1..=999).contains(&number));
        }
    }

    #[test]
    fn test_avatar() {
        assert_eq!(generate_avatar("HonestReviewer123"), "H");
        assert_eq!(generate_avatar("quiet"), "Q");
        assert_eq!(generate_avatar(""), "A");
    }

    #[test]
    fn test_identity() {
        let identity = Identity::generate();

        assert_eq!(identity.avatar, generate_avatar(&identity.pseudonym));
    }
}
