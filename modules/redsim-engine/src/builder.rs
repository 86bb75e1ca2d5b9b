//! Batch generation and merge orchestration.
//!
//! One run produces a self-contained batch: users first, then posts
//! authored only by those users, each annotated as it is built. Merging
//! into an existing corpus is purely additive (`Corpus::absorb`).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rand::Rng;
use redsim_common::{AnnotatedPost, Corpus, Sentiment};
use tracing::info;

use crate::classifier::annotate;
use crate::composer::{compose_post, compose_user};
use crate::sampler::GeoSampler;

/// Posts per generated user. Floored at one user so every batch can
/// resolve an author reference.
const POSTS_PER_USER: usize = 10;

/// Counters for one generation batch.
#[derive(Debug, Default)]
pub struct BatchStats {
    pub users_created: u32,
    pub users_geocoded: u32,
    pub posts_created: u32,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub entities_tagged: u32,
}

impl std::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Generation Batch Complete ===")?;
        writeln!(f, "Users created:   {}", self.users_created)?;
        writeln!(f, "Users geocoded:  {}", self.users_geocoded)?;
        writeln!(f, "Posts created:   {}", self.posts_created)?;
        writeln!(f, "Entities tagged: {}", self.entities_tagged)?;
        writeln!(f, "\nSentiment:")?;
        writeln!(f, "  positive: {}", self.positive)?;
        writeln!(f, "  neutral:  {}", self.neutral)?;
        writeln!(f, "  negative: {}", self.negative)?;
        Ok(())
    }
}

/// Builds one generation batch against a fixed time anchor.
pub struct CorpusBuilder<'a> {
    sampler: &'a GeoSampler,
    anchor: DateTime<Utc>,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(sampler: &'a GeoSampler, anchor: DateTime<Utc>) -> Self {
        Self { sampler, anchor }
    }

    /// Generate `n_posts` posts and `max(1, n_posts / 10)` users as a
    /// fresh batch. Authors are drawn only from the batch's own users;
    /// identifiers are unguarded high-entropy tokens (collision policy in
    /// DESIGN.md).
    pub fn build(&self, n_posts: usize, rng: &mut impl Rng) -> (Corpus, BatchStats) {
        let n_users = (n_posts / POSTS_PER_USER).max(1);
        let mut stats = BatchStats::default();

        info!(n_posts, n_users, "generating batch");

        let mut users = IndexMap::with_capacity(n_users);
        let mut user_ids = Vec::with_capacity(n_users);
        for _ in 0..n_users {
            let id = numeric_token(rng);
            let user = compose_user(id.clone(), self.anchor, self.sampler, rng);
            if user.geo.is_some() {
                stats.users_geocoded += 1;
            }
            user_ids.push(id.clone());
            users.insert(id, user);
        }
        stats.users_created = users.len() as u32;

        let mut posts = Vec::with_capacity(n_posts);
        for _ in 0..n_posts {
            let id = numeric_token(rng);
            let author_id = user_ids[rng.random_range(0..user_ids.len())].clone();
            let post = compose_post(id, author_id, self.anchor, rng);
            let annotation = annotate(&post, rng);

            match annotation.sentiment {
                Sentiment::Positive => stats.positive += 1,
                Sentiment::Neutral => stats.neutral += 1,
                Sentiment::Negative => stats.negative += 1,
            }
            stats.entities_tagged += annotation.entities.len() as u32;

            posts.push(AnnotatedPost { post, annotation });
        }
        stats.posts_created = posts.len() as u32;

        let mut batch = Corpus::empty();
        batch.users = users;
        batch.posts = posts;
        (batch, stats)
    }
}

/// A fresh identifier: `'1'` followed by 18 random decimal digits.
pub fn numeric_token(rng: &mut impl Rng) -> String {
    format!(
        "1{}",
        rng.random_range(100_000_000_000_000_000u64..=999_999_999_999_999_999u64)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::colombia_sampler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn identifiers_have_the_numeric_token_shape() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            let id = numeric_token(&mut rng);
            assert_eq!(id.len(), 19);
            assert!(id.starts_with('1'));
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn every_author_resolves_within_the_batch() {
        let sampler = colombia_sampler();
        let builder = CorpusBuilder::new(&sampler, Utc::now());
        let mut rng = StdRng::seed_from_u64(32);
        let (batch, stats) = builder.build(100, &mut rng);

        assert_eq!(batch.users.len(), 10);
        assert_eq!(batch.posts.len(), 100);
        assert_eq!(stats.posts_created, 100);
        for annotated in &batch.posts {
            assert!(batch.users.contains_key(&annotated.post.author_id));
        }
    }

    #[test]
    fn annotation_id_always_matches_its_post() {
        let sampler = colombia_sampler();
        let builder = CorpusBuilder::new(&sampler, Utc::now());
        let mut rng = StdRng::seed_from_u64(33);
        let (batch, _) = builder.build(50, &mut rng);
        for annotated in &batch.posts {
            assert_eq!(annotated.post.id, annotated.annotation.id);
            assert_eq!(annotated.post.text, annotated.annotation.text);
        }
    }

    #[test]
    fn small_batches_still_get_one_user() {
        let sampler = colombia_sampler();
        let builder = CorpusBuilder::new(&sampler, Utc::now());
        let mut rng = StdRng::seed_from_u64(34);
        let (batch, _) = builder.build(3, &mut rng);
        assert_eq!(batch.users.len(), 1);
        assert_eq!(batch.posts.len(), 3);
        let only_user = batch.users.keys().next().unwrap();
        for annotated in &batch.posts {
            assert_eq!(&annotated.post.author_id, only_user);
        }
    }

    #[test]
    fn merge_is_additive_and_preserves_prior_records() {
        let sampler = colombia_sampler();
        let builder = CorpusBuilder::new(&sampler, Utc::now());
        let mut rng = StdRng::seed_from_u64(35);

        let (mut corpus, _) = builder.build(40, &mut rng);
        let prior_users = corpus.users.len();
        let prior_posts: Vec<_> = corpus.posts.clone();

        let (batch, _) = builder.build(25, &mut rng);
        corpus.absorb(batch);

        assert!(corpus.users.len() >= prior_users);
        assert_eq!(corpus.posts.len(), prior_posts.len() + 25);
        assert_eq!(&corpus.posts[..prior_posts.len()], &prior_posts[..]);
    }

    #[test]
    fn batch_posts_never_reference_prior_users() {
        let sampler = colombia_sampler();
        let builder = CorpusBuilder::new(&sampler, Utc::now());
        let mut rng = StdRng::seed_from_u64(36);

        let (first, _) = builder.build(30, &mut rng);
        let (second, _) = builder.build(30, &mut rng);
        for annotated in &second.posts {
            assert!(second.users.contains_key(&annotated.post.author_id));
            assert!(!first.users.contains_key(&annotated.post.author_id));
        }
    }

    #[test]
    fn sentiment_counters_sum_to_the_batch_size() {
        let sampler = colombia_sampler();
        let builder = CorpusBuilder::new(&sampler, Utc::now());
        let mut rng = StdRng::seed_from_u64(37);
        let (_, stats) = builder.build(200, &mut rng);
        assert_eq!(stats.positive + stats.neutral + stats.negative, 200);
    }
}
