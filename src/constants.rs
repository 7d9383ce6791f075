//! Centralized constants for the circle-plot crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// WGS84 equatorial radius in meters
    pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

    /// Degrees per meter along a meridian (first-order, small distances only)
    pub const METERS_TO_DEGREES: f64 = 0.000_008_983_111_749_9;

    /// Largest latitude representable in Web Mercator
    pub const MERCATOR_MAX_LAT: f64 = 85.051_128_78;
}

/// External API endpoints
pub mod api {
    /// Google Roads API snap-to-roads endpoint
    pub const ROADS_URL: &str = "https://roads.googleapis.com/v1/snapToRoads";

    /// Google map tile template (`{style}`, `{x}`, `{y}`, `{z}` placeholders)
    pub const GOOGLE_TILE_URL: &str = "https://mt1.google.com/vt/lyrs={style}&x={x}&y={y}&z={z}";

    /// Maximum points the Roads API accepts in one path
    pub const ROADS_MAX_PATH_POINTS: usize = 100;

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("circle-plot/", env!("CARGO_PKG_VERSION"));
}

/// Map raster settings
pub mod map {
    /// Edge length of a web map tile in pixels
    pub const TILE_SIZE: u32 = 256;

    /// Lowest supported zoom level
    pub const MIN_ZOOM: u8 = 1;

    /// Highest supported zoom level
    pub const MAX_ZOOM: u8 = 20;

    /// Refuse to allocate images wider or taller than this
    pub const MAX_IMAGE_DIMENSION: u32 = 8192;

    /// Marker opacity (0-255)
    pub const MARKER_ALPHA: u8 = 178;
}
