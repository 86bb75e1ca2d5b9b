//! City-weighted spatial sampling.
//!
//! Draws coordinates biased toward population centers: most points land
//! near a weighted anchor city, the rest spread uniformly over the
//! bounding region. Every output is clamped into the region, so anchors
//! near a border pile density up against the edge instead of resampling.

use rand::Rng;
use redsim_common::{BoundingBox, COLOMBIA_BOUNDS};

use crate::catalog;

/// Probability that a draw is anchored to a city rather than uniform over
/// the whole region.
pub const ANCHOR_BIAS: f64 = 0.7;

/// Maximum radial offset from an anchor's nominal coordinate, in degrees
/// (0.5° is roughly 55 km at these latitudes).
pub const MAX_OFFSET_DEG: f64 = 0.5;

/// A named point with a relative selection weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub weight: f64,
}

/// Roulette-wheel selection over anchors as an explicit prefix-sum table:
/// weights are accumulated once at construction and lookup is a binary
/// search for the first prefix that meets the draw. Ties break toward the
/// lower index, so list order is significant.
#[derive(Debug, Clone)]
pub struct AnchorTable {
    anchors: Vec<Anchor>,
    prefix: Vec<f64>,
    total: f64,
}

impl AnchorTable {
    /// Panics if `anchors` is empty or any weight is non-positive; anchor
    /// sets are compile-time catalog data, not user input.
    pub fn new(anchors: Vec<Anchor>) -> Self {
        assert!(!anchors.is_empty(), "anchor table requires at least one anchor");
        let mut prefix = Vec::with_capacity(anchors.len());
        let mut total = 0.0;
        for anchor in &anchors {
            assert!(
                anchor.weight > 0.0,
                "anchor {} has non-positive weight {}",
                anchor.name,
                anchor.weight
            );
            total += anchor.weight;
            prefix.push(total);
        }
        Self {
            anchors,
            prefix,
            total,
        }
    }

    /// Weighted draw: uniform value in [0, total), first anchor whose
    /// cumulative weight meets or exceeds it wins.
    pub fn pick(&self, rng: &mut impl Rng) -> &Anchor {
        let draw = rng.random_range(0.0..self.total);
        let idx = self.prefix.partition_point(|&p| p < draw);
        &self.anchors[idx]
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// The weighted geographic sampler over one bounding region.
#[derive(Debug, Clone)]
pub struct GeoSampler {
    table: AnchorTable,
    bounds: BoundingBox,
    anchor_bias: f64,
}

impl GeoSampler {
    pub fn new(table: AnchorTable, bounds: BoundingBox) -> Self {
        Self {
            table,
            bounds,
            anchor_bias: ANCHOR_BIAS,
        }
    }

    /// Override the anchor probability. `1.0` forces every draw through
    /// the anchor table, which the distribution tests rely on.
    pub fn with_anchor_bias(mut self, anchor_bias: f64) -> Self {
        self.anchor_bias = anchor_bias;
        self
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Draw one `(lat, lon)` inside the bounding region.
    pub fn sample_point(&self, rng: &mut impl Rng) -> (f64, f64) {
        if rng.random_bool(self.anchor_bias) {
            let anchor = self.table.pick(rng);
            // Center-weighted radial offset: the second factor pulls mass
            // toward the anchor, so this is not a uniform disk.
            let distance =
                rng.random_range(0.0..=MAX_OFFSET_DEG) * rng.random_range(0.3..=1.0);
            let lat = anchor.lat + if rng.random_bool(0.5) { distance } else { -distance };
            let lon = anchor.lon + if rng.random_bool(0.5) { distance } else { -distance };
            self.bounds.clamp(lat, lon)
        } else {
            (
                rng.random_range(self.bounds.lat_min..=self.bounds.lat_max),
                rng.random_range(self.bounds.lon_min..=self.bounds.lon_max),
            )
        }
    }
}

/// The production sampler: catalog city anchors over Colombia's bounds.
pub fn colombia_sampler() -> GeoSampler {
    GeoSampler::new(AnchorTable::new(catalog::CITY_ANCHORS.to_vec()), COLOMBIA_BOUNDS)
}
