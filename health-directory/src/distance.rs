use crate::facility::{Coordinates, Facility};
use std::cmp::Ordering;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, haversine formula.
///
/// Pure and deterministic. Non-numeric (NaN) inputs propagate NaN; callers
/// validate coordinates upstream.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Render a distance as the label carried on a facility, e.g. `"1.3 km"`.
pub fn distance_label(km: f64) -> String {
    format!("{km:.1} km")
}

/// Numeric prefix of a distance label; a missing label counts as zero.
fn label_km(label: Option<&str>) -> f64 {
    label
        .and_then(|raw| raw.split_whitespace().next())
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(0.0)
}

/// Sort facilities ascending by the numeric prefix of their distance label.
///
/// The sort is stable, so ties keep their original relative order. A
/// facility with no distance label sorts first (treated as zero) - kept
/// deliberately to match the shipped directory behavior.
pub fn rank_by_distance(facilities: &mut [Facility]) {
    facilities.sort_by(|a, b| {
        label_km(a.distance.as_deref())
            .partial_cmp(&label_km(b.distance.as_deref()))
            .unwrap_or(Ordering::Equal)
    });
}
