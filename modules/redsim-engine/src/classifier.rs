//! Lexical sentiment and entity heuristics.
//!
//! Keyword counting and gazetteer containment, nothing learned. The label
//! is deterministic for a given text; only the confidence numbers are
//! drawn from label-specific ranges, and the three scores do not form a
//! probability simplex.

use rand::Rng;
use redsim_common::{Annotation, ConfidenceScores, EntityCategory, EntityMention, Post, Sentiment};

use crate::catalog;

/// Entity lists are truncated to this many mentions, in gazetteer order.
pub const MAX_ENTITIES: usize = 5;

/// Case-insensitive occurrence count across a keyword set. A keyword
/// appearing twice counts twice; occurrences are not deduplicated.
fn keyword_hits(lowered: &str, words: &[&str]) -> usize {
    words.iter().map(|w| lowered.matches(w).count()).sum()
}

/// Classify one text: majority keyword count decides the label, equal
/// counts (including zero/zero) fall back to neutral.
pub fn classify(text: &str, rng: &mut impl Rng) -> (Sentiment, ConfidenceScores) {
    let lowered = text.to_lowercase();
    let positive = keyword_hits(&lowered, catalog::POSITIVE_WORDS);
    let negative = keyword_hits(&lowered, catalog::NEGATIVE_WORDS);

    let sentiment = if negative > positive {
        Sentiment::Negative
    } else if positive > negative {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    };

    // The winning label draws from a high sub-range, the others from low
    // sub-ranges, so its score is stochastically the largest.
    let confidence_scores = match sentiment {
        Sentiment::Negative => ConfidenceScores {
            positive: rng.random_range(0.01..=0.15),
            neutral: rng.random_range(0.15..=0.35),
            negative: rng.random_range(0.55..=0.98),
        },
        Sentiment::Positive => ConfidenceScores {
            positive: rng.random_range(0.55..=0.95),
            neutral: rng.random_range(0.05..=0.35),
            negative: rng.random_range(0.01..=0.15),
        },
        Sentiment::Neutral => ConfidenceScores {
            positive: rng.random_range(0.05..=0.25),
            neutral: rng.random_range(0.65..=0.90),
            negative: rng.random_range(0.05..=0.25),
        },
    };

    (sentiment, confidence_scores)
}

/// Extract gazetteer mentions from the raw (unmodified) text. Categories
/// scan in fixed order — Person, Organization, Location, Event — and the
/// result truncates to the first [`MAX_ENTITIES`] matches in that order,
/// which downstream fixtures depend on.
pub fn extract_entities(text: &str, rng: &mut impl Rng) -> Vec<EntityMention> {
    let passes: [(&[&str], EntityCategory, f64, f64); 4] = [
        (catalog::PERSONS, EntityCategory::Person, 0.85, 1.0),
        (catalog::ORGANIZATIONS, EntityCategory::Organization, 0.75, 0.95),
        (catalog::PLACES, EntityCategory::Location, 0.80, 0.98),
        (catalog::EVENTS, EntityCategory::Event, 0.70, 0.90),
    ];

    let mut mentions = Vec::new();
    for (entries, category, lo, hi) in passes {
        for entry in entries {
            if text.contains(entry) {
                mentions.push(EntityMention {
                    text: (*entry).to_string(),
                    category,
                    confidence: rng.random_range(lo..=hi),
                });
            }
        }
    }
    mentions.truncate(MAX_ENTITIES);
    mentions
}

/// Build the full derived record for one post.
pub fn annotate(post: &Post, rng: &mut impl Rng) -> Annotation {
    let (sentiment, confidence_scores) = classify(&post.text, rng);
    Annotation {
        id: post.id.clone(),
        text: post.text.clone(),
        created_at: post.created_at,
        sentiment,
        confidence_scores,
        entities: extract_entities(&post.text, rng),
        geo: None,
    }
}
