//! Geographic primitives
//!
//! This module handles:
//! - Coordinates and their range validation
//! - The circle description (center, radius, point count)
//! - Bounding boxes used to frame a map

pub mod circle;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Description of a circle of points around a center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center: Coordinates,
    pub radius_meters: f64,
    pub point_count: usize,
}

impl CircleSpec {
    pub fn new(center: Coordinates, radius_meters: f64, point_count: usize) -> Self {
        Self {
            center,
            radius_meters,
            point_count,
        }
    }

    /// Check the center, radius and point count.
    ///
    /// The generator itself accepts anything; callers that take user input
    /// should run this first.
    pub fn validate(&self) -> Result<()> {
        self.center.validate()?;
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Radius must be a positive number of meters, got {}",
                self.radius_meters
            )));
        }
        if self.point_count == 0 {
            return Err(Error::InvalidPointCount(
                "At least one point is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rectangular lat/lng window in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub fn west(&self) -> f64 {
        self.lng_min
    }

    pub fn east(&self) -> f64 {
        self.lng_max
    }

    pub fn south(&self) -> f64 {
        self.lat_min
    }

    pub fn north(&self) -> f64 {
        self.lat_max
    }

    /// Midpoint of the box
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lng_min + self.lng_max) / 2.0,
        )
    }

    /// Whether the coordinate lies inside the box (edges inclusive)
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lng_min..=self.lng_max).contains(&point.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validate() {
        assert!(Coordinates::new(29.4232653, -98.5041371).validate().is_ok());
        assert!(Coordinates::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinates::new(90.1, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -180.5).validate().is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_coordinates_display() {
        let coords = Coordinates::new(29.5, -98.25);
        assert_eq!(coords.to_string(), "29.5,-98.25");
    }

    #[test]
    fn test_circle_spec_validate() {
        let center = Coordinates::new(29.4232653, -98.5041371);
        assert!(CircleSpec::new(center, 3218.69, 100).validate().is_ok());

        assert!(matches!(
            CircleSpec::new(center, 0.0, 100).validate(),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            CircleSpec::new(center, -5.0, 100).validate(),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            CircleSpec::new(center, f64::INFINITY, 100).validate(),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            CircleSpec::new(center, 100.0, 0).validate(),
            Err(Error::InvalidPointCount(_))
        ));
        assert!(matches!(
            CircleSpec::new(Coordinates::new(91.0, 0.0), 100.0, 10).validate(),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_bounding_box_accessors() {
        let bbox = BoundingBox {
            lat_min: 10.0,
            lat_max: 12.0,
            lng_min: -5.0,
            lng_max: -1.0,
        };

        assert_eq!(bbox.west(), -5.0);
        assert_eq!(bbox.east(), -1.0);
        assert_eq!(bbox.south(), 10.0);
        assert_eq!(bbox.north(), 12.0);
        assert_eq!(bbox.center(), Coordinates::new(11.0, -3.0));
        assert!(bbox.contains(Coordinates::new(11.0, -2.0)));
        assert!(!bbox.contains(Coordinates::new(13.0, -2.0)));
    }
}
