use serde::{Deserialize, Serialize};

/// A user geocoordinate as stored on the wire: `x` is longitude, `y` is
/// latitude (the dataset inherited this axis naming from its map layer).
/// Hand-edited documents sometimes carry a geo object with a missing
/// component, so both axes are optional at this level; `complete()` is the
/// only sanctioned way to read the pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl GeoCoordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            x: Some(lon),
            y: Some(lat),
        }
    }

    /// Returns `(lon, lat)` if both components are present.
    pub fn complete(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// Rectangular latitude/longitude region. All sampled and audited
/// coordinates must fall inside it, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// Colombia's bounding region.
pub const COLOMBIA_BOUNDS: BoundingBox = BoundingBox {
    lat_min: -4.2,
    lat_max: 12.5,
    lon_min: -79.0,
    lon_max: -66.9,
};

impl BoundingBox {
    /// Membership test, inclusive on all four edges.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }

    /// Clamp a point component-wise into the region.
    pub fn clamp(&self, lat: f64, lon: f64) -> (f64, f64) {
        (
            lat.clamp(self.lat_min, self.lat_max),
            lon.clamp(self.lon_min, self.lon_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_edges() {
        let b = COLOMBIA_BOUNDS;
        assert!(b.contains(b.lat_min, b.lon_min));
        assert!(b.contains(b.lat_max, b.lon_max));
        assert!(!b.contains(b.lat_max + 0.001, b.lon_min));
        assert!(!b.contains(b.lat_min, b.lon_min - 0.001));
    }

    #[test]
    fn clamp_pulls_outside_points_to_the_border() {
        let b = COLOMBIA_BOUNDS;
        let (lat, lon) = b.clamp(90.0, -200.0);
        assert_eq!(lat, b.lat_max);
        assert_eq!(lon, b.lon_min);
        let (lat, lon) = b.clamp(4.7, -74.1);
        assert_eq!((lat, lon), (4.7, -74.1));
    }

    #[test]
    fn partial_geo_is_never_complete() {
        let only_x = GeoCoordinate {
            x: Some(-74.0),
            y: None,
        };
        assert!(only_x.complete().is_none());
        assert_eq!(
            GeoCoordinate::new(-74.0, 4.7).complete(),
            Some((-74.0, 4.7))
        );
    }
}
