//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default circle center latitude (San Antonio, TX)
pub const DEFAULT_LAT: f64 = 29.4232653;

/// Default circle center longitude
pub const DEFAULT_LNG: f64 = -98.5041371;

/// Default radius in meters (2 miles)
pub const DEFAULT_RADIUS: f64 = 3218.69;

/// Default number of points on the circle
pub const DEFAULT_POINTS: usize = 100;

/// Default zoom: 10 for a city, 15 for streets, 20 for buildings
pub const DEFAULT_ZOOM: u8 = 14;

/// Default tile style
pub const DEFAULT_STYLE: &str = "street";

/// Default output image
pub const DEFAULT_OUTPUT: &str = "GPS_figure.png";

/// Map padding as a fraction of the radius
pub const DEFAULT_PADDING_RATIO: f64 = 0.20;

/// Extra east/west padding multiplier
pub const DEFAULT_LNG_FUDGE_FACTOR: f64 = 4.0;

/// Marker radius in pixels
pub const DEFAULT_MARKER_RADIUS: u32 = 4;

/// Default export format for the points command
pub const DEFAULT_FORMAT: &str = "text";

/// HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "circle-plot";
