//! Template-driven content and record synthesis.
//!
//! Texts come from the catalog templates with uniformly drawn
//! substitutions; post and profile records come from a time-bounded random
//! model. Engagement counters use exponential draws to emulate viral skew.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution, Exp};
use redsim_common::{GeoCoordinate, Post, PostMetrics, User, UserMetrics};

use crate::catalog;
use crate::sampler::GeoSampler;

/// Hard cap on post text length, in characters.
pub const MAX_POST_CHARS: usize = 280;
/// Headlines are cut here before substitution to bound template expansion.
const HEADLINE_CAP: usize = 100;
/// Appended after truncation; the capped text is exactly [`MAX_POST_CHARS`].
const ELLIPSIS: &str = "...";
/// Posts date back at most this many hours from the run anchor.
const LOOKBACK_HOURS: i64 = 72;
/// Share of users that carry a geocoordinate.
const GEOCODED_SHARE: f64 = 0.7;

fn pick<'a>(items: &[&'a str], rng: &mut impl Rng) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// One exponential draw with the given rate, scaled and floored. Rates are
/// compile-time constants, so construction cannot fail.
fn exp_count(rate: f64, scale: f64, rng: &mut impl Rng) -> u64 {
    let exp = Exp::new(rate).expect("exponential rate must be positive");
    (exp.sample(rng) * scale) as u64
}

/// A synthetic handle in one of five shapes.
pub fn compose_handle(rng: &mut impl Rng) -> String {
    let first = pick(catalog::FIRST_NAMES, rng);
    let last = pick(catalog::LAST_NAMES, rng);
    let number = rng.random_range(1..=9999);
    let initial: String = last.chars().take(1).collect();

    match rng.random_range(0..5) {
        0 => format!("{first}{last}{number}"),
        1 => format!("{first}_{last}"),
        2 => format!("{last}{first}"),
        3 => format!("{}{number}", first.to_lowercase()),
        _ => format!("{first}{initial}"),
    }
}

/// Expand one template with uniformly drawn substitutions and cap the
/// result at [`MAX_POST_CHARS`] characters.
pub fn compose_text(rng: &mut impl Rng) -> String {
    let template = pick(catalog::TEMPLATES, rng);
    let headline: String = pick(catalog::HEADLINES, rng)
        .chars()
        .take(HEADLINE_CAP)
        .collect();

    // {entidad} draws across persons and organizations as one pool.
    let entity_pool = catalog::PERSONS.len() + catalog::ORGANIZATIONS.len();
    let entity_idx = rng.random_range(0..entity_pool);
    let entity = if entity_idx < catalog::PERSONS.len() {
        catalog::PERSONS[entity_idx]
    } else {
        catalog::ORGANIZATIONS[entity_idx - catalog::PERSONS.len()]
    };

    let place = pick(catalog::PLACES, rng);
    let event = pick(catalog::EVENTS, rng);
    let action = pick(catalog::ACTIONS, rng);
    let handle = compose_handle(rng);

    let text = template
        .replace("{noticia}", &headline)
        .replace("{entidad}", entity)
        .replace("{lugar}", place)
        .replace("{evento}", event)
        .replace("{accion}", action)
        .replace("{usuario}", &handle);

    cap_length(text)
}

/// Truncate to 277 characters plus the ellipsis when the text runs long.
/// Counts characters, not bytes — the catalog is Spanish text.
fn cap_length(text: String) -> String {
    if text.chars().count() <= MAX_POST_CHARS {
        return text;
    }
    let mut capped: String = text.chars().take(MAX_POST_CHARS - ELLIPSIS.len()).collect();
    capped.push_str(ELLIPSIS);
    capped
}

/// Assemble one post. The timestamp falls inside the 72-hour look-back
/// window, strictly at or before `anchor`.
pub fn compose_post(
    id: String,
    author_id: String,
    anchor: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Post {
    let offset = Duration::hours(rng.random_range(0..LOOKBACK_HOURS))
        + Duration::minutes(rng.random_range(0..60))
        + Duration::seconds(rng.random_range(0..60));

    let public_metrics = PostMetrics {
        retweet_count: exp_count(0.01, 10.0, rng),
        reply_count: exp_count(0.05, 5.0, rng),
        like_count: exp_count(0.01, 20.0, rng),
        quote_count: exp_count(0.1, 2.0, rng),
        bookmark_count: exp_count(0.1, 3.0, rng),
        impression_count: exp_count(0.01, 100.0, rng),
    };

    Post {
        text: compose_text(rng),
        author_id,
        created_at: anchor - offset,
        lang: "es".to_string(),
        possibly_sensitive: rng.random_bool(0.05),
        edit_history_tweet_ids: vec![id.clone()],
        public_metrics,
        id,
    }
}

/// Assemble one user profile. 70% receive a geocoordinate drawn from the
/// spatial sampler; the rest carry none at all — never half a pair.
pub fn compose_user(
    id: String,
    now: DateTime<Utc>,
    sampler: &GeoSampler,
    rng: &mut impl Rng,
) -> User {
    let first = pick(catalog::FIRST_NAMES, rng);
    let last = pick(catalog::LAST_NAMES, rng);

    let public_metrics = UserMetrics {
        followers_count: rng.random_range(10..=50_000),
        following_count: rng.random_range(20..=5_000),
        tweet_count: rng.random_range(100..=300_000),
        listed_count: rng.random_range(0..=500),
        like_count: rng.random_range(100..=200_000),
        media_count: rng.random_range(0..=1_000),
    };

    let geo = if rng.random_bool(GEOCODED_SHARE) {
        let (lat, lon) = sampler.sample_point(rng);
        Some(GeoCoordinate::new(lon, lat))
    } else {
        None
    };

    User {
        name: format!("{first} {last}"),
        username: compose_handle(rng),
        id,
        location: pick(catalog::HOME_CITIES, rng).to_string(),
        verified: rng.random_bool(0.05),
        public_metrics,
        created_at: now - Duration::days(rng.random_range(365..=5000)),
        geo,
    }
}
