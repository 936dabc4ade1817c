//! Distance calculations over route polylines.
//!
//! Exact distances use the WGS84 geodesic from `geo`. The planar squared
//! difference in [`closest_index`] is only a prefilter and never leaves
//! this module.

use geo::{Distance, Geodesic};

use crate::domain::Coordinate;

/// Metres in a statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// How many planar candidates are re-ranked geodesically.
const REFINE_CANDIDATES: usize = 10;

/// Geodesic distance between two coordinates, in miles.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    Geodesic.distance(a.to_point(), b.to_point()) / METERS_PER_MILE
}

/// Distance travelled from `points[0]` to each point, in miles.
///
/// The result has the same length as `points` and is non-decreasing.
/// Empty input yields an empty table.
pub fn cumulative_distances(points: &[Coordinate]) -> Vec<f64> {
    let mut table = Vec::with_capacity(points.len());
    let mut total = 0.0;

    if !points.is_empty() {
        table.push(total);
    }

    for pair in points.windows(2) {
        total += distance_miles(pair[0], pair[1]);
        table.push(total);
    }

    table
}

/// Index of the point in `points` geodesically closest to `target`.
///
/// Two stages: squared planar degree difference over every point, then
/// exact geodesic distance over the [`REFINE_CANDIDATES`] best. Ties go to
/// the lowest index in both stages. Returns `None` for empty input.
pub fn closest_index(target: Coordinate, points: &[Coordinate]) -> Option<usize> {
    let candidates = planar_candidates(target, points, REFINE_CANDIDATES);
    refine_geodesic(target, points, &candidates)
}

/// Indices of the `limit` points with the smallest squared planar difference
/// to `target`, ordered best first.
fn planar_candidates(target: Coordinate, points: &[Coordinate], limit: usize) -> Vec<usize> {
    let mut scored: Vec<(f64, usize)> = points
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let dlat = target.latitude - p.latitude;
            let dlon = target.longitude - p.longitude;
            (dlat * dlat + dlon * dlon, idx)
        })
        .collect();

    // Stable sort keeps original order among equal scores
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.truncate(limit);
    scored.into_iter().map(|(_, idx)| idx).collect()
}

/// Pick the candidate with the smallest geodesic distance; ties go to the
/// lowest original index.
fn refine_geodesic(
    target: Coordinate,
    points: &[Coordinate],
    candidates: &[usize],
) -> Option<usize> {
    let mut best: Option<(f64, usize)> = None;

    for &idx in candidates {
        let d = distance_miles(target, points[idx]);
        best = match best {
            Some((best_d, best_idx)) if d > best_d || (d == best_d && idx > best_idx) => {
                Some((best_d, best_idx))
            }
            _ => Some((d, idx)),
        };
    }

    best.map(|(_, idx)| idx)
}
