use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::geo::GeoCoordinate;

/// Serde adapter for the dataset's timestamp shape (`2025-08-06T14:03:21.000Z`).
/// The document predates this tool and every consumer parses that exact
/// layout, so round-tripping must preserve it.
pub mod wire_time {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

// --- User ---

/// Profile counters. Independent, non-negative, no cross-field invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub followers_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub listed_count: u64,
    pub like_count: u64,
    pub media_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub username: String,
    /// `'1'` followed by 18 random decimal digits.
    pub id: String,
    /// Home-location label, one of the catalog place names.
    pub location: String,
    pub verified: bool,
    pub public_metrics: UserMetrics,
    #[serde(with = "wire_time")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinate>,
}

// --- Post ---

/// Engagement counters, exponentially distributed to emulate viral skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetrics {
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
    pub bookmark_count: u64,
    pub impression_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    /// Must resolve to a User id at construction time.
    pub author_id: String,
    #[serde(with = "wire_time")]
    pub created_at: DateTime<Utc>,
    pub lang: String,
    pub possibly_sensitive: bool,
    /// Always contains exactly the post's own id.
    pub edit_history_tweet_ids: Vec<String>,
    pub public_metrics: PostMetrics,
}

// --- Annotation ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Per-label confidence draws. Each lies in [0,1]; the three need not sum
/// to 1 — this is a heuristic, not a probability simplex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Event,
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::Person => write!(f, "Person"),
            EntityCategory::Organization => write!(f, "Organization"),
            EntityCategory::Location => write!(f, "Location"),
            EntityCategory::Event => write!(f, "Event"),
        }
    }
}

/// A catalog string recognized inside a post's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Verbatim catalog entry.
    pub text: String,
    pub category: EntityCategory,
    pub confidence: f64,
}

/// The derived sentiment/entity record, 1:1 with its Post by identifier.
/// Mirrors the post's text and timestamp so the annotation array is usable
/// standalone by downstream visualizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub text: String,
    #[serde(with = "wire_time")]
    pub created_at: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    pub entities: Vec<EntityMention>,
    /// Reserved on the wire; always null today.
    pub geo: Option<serde_json::Value>,
}

// --- Combined record ---

/// A post together with its annotation. The storage document keeps the two
/// in parallel arrays; in memory they travel as one record so the
/// index-correspondence invariant cannot drift across merges.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPost {
    pub post: Post,
    pub annotation: Annotation,
}

// --- Corpus ---

/// The aggregate root: everything one dataset file contains.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Keyed by user id, insertion-ordered. Merge is a union; the value
    /// applied last wins on key collision.
    pub users: IndexMap<String, User>,
    /// Append-only across runs.
    pub posts: Vec<AnnotatedPost>,
    /// Opaque pass-through state owned by the map layer.
    pub places: serde_json::Value,
}

impl Corpus {
    pub fn empty() -> Self {
        Self {
            users: IndexMap::new(),
            posts: Vec::new(),
            places: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Absorb one generation batch. Prior users, posts, and annotations are
    /// preserved unmodified; batch users are applied last so they win any
    /// id collision.
    pub fn absorb(&mut self, batch: Corpus) {
        self.users.extend(batch.users);
        self.posts.extend(batch.posts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_user(id: &str) -> User {
        User {
            name: "Ana García".to_string(),
            username: "AnaGarcia42".to_string(),
            id: id.to_string(),
            location: "Bogotá".to_string(),
            verified: false,
            public_metrics: UserMetrics {
                followers_count: 120,
                following_count: 80,
                tweet_count: 900,
                listed_count: 2,
                like_count: 4300,
                media_count: 12,
            },
            created_at: Utc.with_ymd_and_hms(2020, 3, 14, 9, 26, 53).unwrap(),
            geo: Some(GeoCoordinate::new(-74.0721, 4.7110)),
        }
    }

    fn test_annotated(id: &str, author: &str) -> AnnotatedPost {
        let created = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let post = Post {
            id: id.to_string(),
            text: "Análisis: reforma política avanza. #Colombia".to_string(),
            author_id: author.to_string(),
            created_at: created,
            lang: "es".to_string(),
            possibly_sensitive: false,
            edit_history_tweet_ids: vec![id.to_string()],
            public_metrics: PostMetrics {
                retweet_count: 3,
                reply_count: 1,
                like_count: 10,
                quote_count: 0,
                bookmark_count: 0,
                impression_count: 250,
            },
        };
        let annotation = Annotation {
            id: id.to_string(),
            text: post.text.clone(),
            created_at: created,
            sentiment: Sentiment::Neutral,
            confidence_scores: ConfidenceScores {
                positive: 0.1,
                neutral: 0.8,
                negative: 0.1,
            },
            entities: vec![],
            geo: None,
        };
        AnnotatedPost { post, annotation }
    }

    #[test]
    fn wire_time_round_trips_millis_format() {
        let user = test_user("1234567890123456789");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"2020-03-14T09:26:53.000Z\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.created_at, user.created_at);
    }

    #[test]
    fn user_without_geo_omits_the_key() {
        let mut user = test_user("1111111111111111111");
        user.geo = None;
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("\"geo\""));
    }

    #[test]
    fn partial_geo_round_trips_untouched() {
        let json = r#"{"x":-74.1}"#;
        let geo: GeoCoordinate = serde_json::from_str(json).unwrap();
        assert!(geo.complete().is_none());
        assert_eq!(serde_json::to_string(&geo).unwrap(), json);
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
        assert_eq!(
            serde_json::to_string(&EntityCategory::Organization).unwrap(),
            "\"Organization\""
        );
    }

    #[test]
    fn absorb_is_purely_additive() {
        let mut corpus = Corpus::empty();
        corpus.users.insert("1a".to_string(), test_user("1a"));
        corpus.posts.push(test_annotated("1p", "1a"));
        let before = corpus.posts[0].clone();

        let mut batch = Corpus::empty();
        batch.users.insert("1b".to_string(), test_user("1b"));
        batch.posts.push(test_annotated("1q", "1b"));
        corpus.absorb(batch);

        assert_eq!(corpus.users.len(), 2);
        assert_eq!(corpus.posts.len(), 2);
        assert_eq!(corpus.posts[0], before);
        // Insertion order preserved: prior user first.
        assert_eq!(corpus.users.get_index(0).unwrap().0, "1a");
    }

    #[test]
    fn absorb_favors_the_batch_on_id_collision() {
        let mut corpus = Corpus::empty();
        corpus.users.insert("1a".to_string(), test_user("1a"));

        let mut fresh = test_user("1a");
        fresh.username = "Renamed".to_string();
        let mut batch = Corpus::empty();
        batch.users.insert("1a".to_string(), fresh);
        corpus.absorb(batch);

        assert_eq!(corpus.users.len(), 1);
        assert_eq!(corpus.users["1a"].username, "Renamed");
    }
}
