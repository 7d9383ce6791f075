//! Circle point generation
//!
//! Places points evenly around a circle using an equirectangular
//! approximation: the area around the center is treated as flat and the
//! longitude scale is corrected with cos(center latitude) only. Accurate to a
//! few meters for radii under ~100 km away from the poles.

use crate::constants::geo::{EARTH_RADIUS_METERS, METERS_TO_DEGREES};
use crate::coord::{BoundingBox, CircleSpec, Coordinates};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Margin added around the circle when framing a map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Framing {
    /// Padding as a fraction of the radius
    pub padding_ratio: f64,

    /// Extra multiplier on the padding east and west. Purely cosmetic: it
    /// widens the rendered map, there is no geometry behind the value.
    pub lng_fudge_factor: f64,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            padding_ratio: 0.20,
            lng_fudge_factor: 4.0,
        }
    }
}

impl Framing {
    /// Padding in meters for a circle of the given radius
    pub fn padding_meters(&self, radius_meters: f64) -> f64 {
        radius_meters * self.padding_ratio
    }

    /// Bounding box for the circle with this framing applied
    pub fn bounding_box(&self, spec: &CircleSpec) -> BoundingBox {
        compute_bounding_box(
            spec,
            self.padding_meters(spec.radius_meters),
            self.lng_fudge_factor,
        )
    }
}

/// Generate `spec.point_count` points evenly spaced around the circle
///
/// # Arguments
/// * `spec` - Center, radius in meters and number of points
///
/// # Returns
/// Points in order of increasing angle, starting due east of the center and
/// turning counter-clockwise (north next). Empty when `point_count` is zero.
///
/// # Algorithm
/// For point k: angle = 2πk/N, dx = r·cos(angle), dy = r·sin(angle), then
/// - lat = lat0 + (180/π)·dy/R
/// - lng = lng0 + (180/π)·dx/R / cos(lat0)
///
/// Nothing is validated or wrapped: circles crossing the antimeridian or a
/// pole produce out-of-range coordinates.
pub fn generate_circle(spec: &CircleSpec) -> Vec<Coordinates> {
    let n = spec.point_count;
    let center = spec.center;
    let lng_scale = (center.lat * PI / 180.0).cos();

    (0..n)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / n as f64;
            let dx = spec.radius_meters * angle.cos();
            let dy = spec.radius_meters * angle.sin();

            Coordinates::new(
                center.lat + (180.0 / PI) * (dy / EARTH_RADIUS_METERS),
                center.lng + (180.0 / PI) * (dx / EARTH_RADIUS_METERS) / lng_scale,
            )
        })
        .collect()
}

/// Compute the map window around a circle
///
/// # Arguments
/// * `spec` - The circle
/// * `padding_meters` - Margin added beyond the radius
/// * `lng_fudge_factor` - Multiplier applied to the padding east and west
///
/// Uses the fixed meters-to-degrees factor for both axes, so the box is only
/// meaningful for small radii.
pub fn compute_bounding_box(
    spec: &CircleSpec,
    padding_meters: f64,
    lng_fudge_factor: f64,
) -> BoundingBox {
    let lat_half = (spec.radius_meters + padding_meters) * METERS_TO_DEGREES;
    let lng_half = (spec.radius_meters + lng_fudge_factor * padding_meters) * METERS_TO_DEGREES;

    BoundingBox {
        lat_min: spec.center.lat - lat_half,
        lat_max: spec.center.lat + lat_half,
        lng_min: spec.center.lng - lng_half,
        lng_max: spec.center.lng + lng_half,
    }
}

/// Calculate the distance between two points in meters (Haversine formula)
pub fn haversine_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat * PI / 180.0;
    let lat2 = p2.lat * PI / 180.0;
    let delta_lat = (p2.lat - p1.lat) * PI / 180.0;
    let delta_lng = (p2.lng - p1.lng) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Angle of `point` around `center` in radians, in [0, 2π)
///
/// Inverts the projection used by [`generate_circle`], so the k-th generated
/// point maps back to 2πk/N.
pub fn local_bearing(center: Coordinates, point: Coordinates) -> f64 {
    let lng_scale = (center.lat * PI / 180.0).cos();
    let dy = (point.lat - center.lat) * PI / 180.0 * EARTH_RADIUS_METERS;
    let dx = (point.lng - center.lng) * PI / 180.0 * EARTH_RADIUS_METERS * lng_scale;

    dy.atan2(dx).rem_euclid(2.0 * PI)
}
