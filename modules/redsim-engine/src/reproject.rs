//! Re-projection of persisted user coordinates.
//!
//! Rewrites every complete `geo` pair through the spatial sampler, in
//! place. Users without a geo field, or with a partial pair, are left
//! untouched and counted as skipped.

use indexmap::IndexMap;
use rand::Rng;
use redsim_common::User;
use tracing::debug;

use crate::sampler::GeoSampler;

/// Counters for one re-projection pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReprojectStats {
    pub users_total: usize,
    pub users_updated: usize,
    pub users_skipped: usize,
}

impl std::fmt::Display for ReprojectStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} users scanned, {} re-projected, {} without usable coordinates",
            self.users_total, self.users_updated, self.users_skipped
        )
    }
}

/// Stored coordinates keep 6 decimal places (~0.1 m), matching the rest
/// of the dataset.
fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

/// Rewrite every complete geocoordinate in `users` with a fresh draw from
/// the sampler. Only the coordinate fields are touched.
pub fn reproject_users(
    users: &mut IndexMap<String, User>,
    sampler: &GeoSampler,
    rng: &mut impl Rng,
) -> ReprojectStats {
    let mut stats = ReprojectStats {
        users_total: users.len(),
        ..Default::default()
    };

    for user in users.values_mut() {
        let complete = user.geo.as_ref().and_then(|g| g.complete()).is_some();
        if !complete {
            if user.geo.is_some() {
                debug!(user = user.id.as_str(), "partial geo pair, skipping");
            }
            stats.users_skipped += 1;
            continue;
        }
        let (lat, lon) = sampler.sample_point(rng);
        if let Some(geo) = user.geo.as_mut() {
            geo.x = Some(round6(lon));
            geo.y = Some(round6(lat));
        }
        stats.users_updated += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::colombia_sampler;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use redsim_common::{GeoCoordinate, UserMetrics, COLOMBIA_BOUNDS};

    fn user(id: &str, geo: Option<GeoCoordinate>) -> User {
        User {
            name: "Pedro Rojas".to_string(),
            username: format!("pedro{id}"),
            id: id.to_string(),
            location: "Neiva".to_string(),
            verified: false,
            public_metrics: UserMetrics {
                followers_count: 5,
                following_count: 5,
                tweet_count: 5,
                listed_count: 0,
                like_count: 5,
                media_count: 0,
            },
            created_at: Utc::now(),
            geo,
        }
    }

    #[test]
    fn complete_pairs_move_inside_the_region() {
        let mut users = IndexMap::new();
        // Coordinates far outside the region must be pulled in.
        users.insert("1a".to_string(), user("1a", Some(GeoCoordinate::new(139.7, 35.6))));
        users.insert("1b".to_string(), user("1b", Some(GeoCoordinate::new(-74.1, 4.6))));

        let sampler = colombia_sampler();
        let mut rng = StdRng::seed_from_u64(51);
        let stats = reproject_users(&mut users, &sampler, &mut rng);

        assert_eq!(stats.users_updated, 2);
        assert_eq!(stats.users_skipped, 0);
        for u in users.values() {
            let (lon, lat) = u.geo.as_ref().unwrap().complete().unwrap();
            assert!(COLOMBIA_BOUNDS.contains(lat, lon));
        }
    }

    #[test]
    fn partial_and_missing_geo_stay_untouched() {
        let mut users = IndexMap::new();
        let partial = GeoCoordinate { x: Some(-74.0), y: None };
        users.insert("2a".to_string(), user("2a", Some(partial)));
        users.insert("2b".to_string(), user("2b", None));

        let sampler = colombia_sampler();
        let mut rng = StdRng::seed_from_u64(52);
        let stats = reproject_users(&mut users, &sampler, &mut rng);

        assert_eq!(stats.users_updated, 0);
        assert_eq!(stats.users_skipped, 2);
        assert_eq!(users["2a"].geo, Some(partial));
        assert_eq!(users["2b"].geo, None);
    }

    #[test]
    fn rewritten_coordinates_are_rounded_to_six_decimals() {
        let mut users = IndexMap::new();
        users.insert("3a".to_string(), user("3a", Some(GeoCoordinate::new(-74.0, 4.7))));

        let sampler = colombia_sampler();
        let mut rng = StdRng::seed_from_u64(53);
        reproject_users(&mut users, &sampler, &mut rng);

        let (lon, lat) = users["3a"].geo.as_ref().unwrap().complete().unwrap();
        assert_eq!(lon, round6(lon));
        assert_eq!(lat, round6(lat));
    }

    #[test]
    fn only_coordinate_fields_change() {
        let mut users = IndexMap::new();
        let original = user("4a", Some(GeoCoordinate::new(10.0, 10.0)));
        users.insert("4a".to_string(), original.clone());

        let sampler = colombia_sampler();
        let mut rng = StdRng::seed_from_u64(54);
        reproject_users(&mut users, &sampler, &mut rng);

        let updated = &users["4a"];
        assert_eq!(updated.username, original.username);
        assert_eq!(updated.public_metrics, original.public_metrics);
        assert_eq!(updated.created_at, original.created_at);
        assert_ne!(updated.geo, original.geo);
    }
}
