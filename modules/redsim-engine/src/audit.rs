//! Read-only geographic distribution audit.
//!
//! Scans every user carrying a complete geocoordinate and reports how the
//! population sits against the bounding region. Users with a partial geo
//! pair are excluded from all statistics.

use redsim_common::{BoundingBox, Corpus};

/// At most this many offending records are listed in the report; the
/// out-of-region count is always exact.
pub const OFFENDER_CAP: usize = 10;

/// Min/max/mean over one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// One user found outside the bounding region.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfRegion {
    pub username: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub bounds: BoundingBox,
    pub total_users: usize,
    pub geocoded_users: usize,
    pub in_region: usize,
    pub out_of_region: usize,
    /// First [`OFFENDER_CAP`] offenders in user iteration order.
    pub offenders: Vec<OutOfRegion>,
    pub latitude: Option<AxisStats>,
    pub longitude: Option<AxisStats>,
}

impl AuditReport {
    pub fn all_in_region(&self) -> bool {
        self.out_of_region == 0
    }
}

fn axis_stats(values: &[f64]) -> Option<AxisStats> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    Some(AxisStats {
        min,
        max,
        mean: sum / values.len() as f64,
    })
}

/// Scan the corpus. Never mutates it.
pub fn audit(corpus: &Corpus, bounds: BoundingBox) -> AuditReport {
    let mut lats = Vec::new();
    let mut lons = Vec::new();
    let mut in_region = 0;
    let mut out_of_region = 0;
    let mut offenders = Vec::new();

    for user in corpus.users.values() {
        let Some((lon, lat)) = user.geo.as_ref().and_then(|g| g.complete()) else {
            continue;
        };
        lats.push(lat);
        lons.push(lon);

        if bounds.contains(lat, lon) {
            in_region += 1;
        } else {
            out_of_region += 1;
            if offenders.len() < OFFENDER_CAP {
                offenders.push(OutOfRegion {
                    username: user.username.clone(),
                    lat,
                    lon,
                });
            }
        }
    }

    AuditReport {
        bounds,
        total_users: corpus.users.len(),
        geocoded_users: lats.len(),
        in_region,
        out_of_region,
        offenders,
        latitude: axis_stats(&lats),
        longitude: axis_stats(&lons),
    }
}

impl std::fmt::Display for AuditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Geographic Distribution Audit ===")?;
        writeln!(f, "Total users:     {}", self.total_users)?;
        writeln!(f, "Geocoded users:  {}", self.geocoded_users)?;
        writeln!(f, "In region:       {}", self.in_region)?;
        writeln!(f, "Out of region:   {}", self.out_of_region)?;

        if let (Some(lat), Some(lon)) = (&self.latitude, &self.longitude) {
            writeln!(f, "\nLatitude:")?;
            writeln!(
                f,
                "  min {:.4}  max {:.4}  mean {:.4}  (bounds {:.1} .. {:.1})",
                lat.min, lat.max, lat.mean, self.bounds.lat_min, self.bounds.lat_max
            )?;
            writeln!(f, "Longitude:")?;
            writeln!(
                f,
                "  min {:.4}  max {:.4}  mean {:.4}  (bounds {:.1} .. {:.1})",
                lon.min, lon.max, lon.mean, self.bounds.lon_min, self.bounds.lon_max
            )?;
        }

        if self.offenders.is_empty() {
            writeln!(f, "\nAll geocoded users are inside the region.")?;
        } else {
            writeln!(f, "\nOut-of-region users:")?;
            for (i, o) in self.offenders.iter().enumerate() {
                writeln!(f, "  {}. @{}: ({:.4}, {:.4})", i + 1, o.username, o.lat, o.lon)?;
            }
            if self.out_of_region > self.offenders.len() {
                writeln!(f, "  ... and {} more", self.out_of_region - self.offenders.len())?;
            }
        }
        Ok(())
    }
}
