//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/circle-plot/config.toml

pub mod defaults;

use crate::constants::api::{GOOGLE_TILE_URL, ROADS_URL};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Circle to generate
    #[serde(default)]
    pub circle: CircleConfig,

    /// Map image settings
    #[serde(default)]
    pub map: MapConfig,

    /// Roads API settings
    #[serde(default)]
    pub roads: RoadsConfig,

    /// Export settings for the points command
    #[serde(default)]
    pub export: ExportConfig,

    /// API keys for external services
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Circle center, radius and point count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Center latitude in decimal degrees
    #[serde(default = "default_lat")]
    pub lat: f64,

    /// Center longitude in decimal degrees
    #[serde(default = "default_lng")]
    pub lng: f64,

    /// Radius in meters
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Number of points on the circle
    #[serde(default = "default_points")]
    pub points: usize,
}

/// Map image settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Tile zoom level (1-20)
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Tile style: satellite, street, terrain, streets_only
    #[serde(default = "default_style")]
    pub style: String,

    /// Output image path
    #[serde(default = "default_output")]
    pub output: String,

    /// Padding around the circle as a fraction of the radius
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: f64,

    /// Extra east/west padding multiplier
    #[serde(default = "default_lng_fudge_factor")]
    pub lng_fudge_factor: f64,

    /// Marker radius in pixels
    #[serde(default = "default_marker_radius")]
    pub marker_radius: u32,

    /// Tile URL template with {style}, {x}, {y}, {z} placeholders
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Fetch tiles; when false the map has a plain background
    #[serde(default = "default_true")]
    pub tiles: bool,

    /// Tile request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Roads API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadsConfig {
    /// snapToRoads endpoint
    #[serde(default = "default_roads_url")]
    pub url: String,

    /// Ask for interpolated points along the road
    #[serde(default = "default_true")]
    pub interpolate: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeysConfig {
    /// Google Roads API key; empty disables road snapping
    #[serde(default)]
    pub google: String,
}

// Default value functions for serde
fn default_lat() -> f64 {
    DEFAULT_LAT
}
fn default_lng() -> f64 {
    DEFAULT_LNG
}
fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_points() -> usize {
    DEFAULT_POINTS
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}
fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}
fn default_padding_ratio() -> f64 {
    DEFAULT_PADDING_RATIO
}
fn default_lng_fudge_factor() -> f64 {
    DEFAULT_LNG_FUDGE_FACTOR
}
fn default_marker_radius() -> u32 {
    DEFAULT_MARKER_RADIUS
}
fn default_tile_url() -> String {
    GOOGLE_TILE_URL.to_string()
}
fn default_roads_url() -> String {
    ROADS_URL.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_true() -> bool {
    true
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lng: default_lng(),
            radius: default_radius(),
            points: default_points(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            style: default_style(),
            output: default_output(),
            padding_ratio: default_padding_ratio(),
            lng_fudge_factor: default_lng_fudge_factor(),
            marker_radius: default_marker_radius(),
            tile_url: default_tile_url(),
            tiles: true,
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for RoadsConfig {
    fn default() -> Self {
        Self {
            url: default_roads_url(),
            interpolate: true,
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// Parse a config value, naming the key on failure
fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["circle", "lat"] => Some(self.circle.lat.to_string()),
            ["circle", "lng"] => Some(self.circle.lng.to_string()),
            ["circle", "radius"] => Some(self.circle.radius.to_string()),
            ["circle", "points"] => Some(self.circle.points.to_string()),

            ["map", "zoom"] => Some(self.map.zoom.to_string()),
            ["map", "style"] => Some(self.map.style.clone()),
            ["map", "output"] => Some(self.map.output.clone()),
            ["map", "padding_ratio"] => Some(self.map.padding_ratio.to_string()),
            ["map", "lng_fudge_factor"] => Some(self.map.lng_fudge_factor.to_string()),
            ["map", "marker_radius"] => Some(self.map.marker_radius.to_string()),
            ["map", "tile_url"] => Some(self.map.tile_url.clone()),
            ["map", "tiles"] => Some(self.map.tiles.to_string()),
            ["map", "timeout_secs"] => Some(self.map.timeout_secs.to_string()),

            ["roads", "url"] => Some(self.roads.url.clone()),
            ["roads", "interpolate"] => Some(self.roads.interpolate.to_string()),
            ["roads", "timeout_secs"] => Some(self.roads.timeout_secs.to_string()),

            ["export", "format"] => Some(self.export.format.clone()),

            ["api_keys", "google"] => Some(self.api_keys.google.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["circle", "lat"] => self.circle.lat = parse_value(key, value)?,
            ["circle", "lng"] => self.circle.lng = parse_value(key, value)?,
            ["circle", "radius"] => self.circle.radius = parse_value(key, value)?,
            ["circle", "points"] => self.circle.points = parse_value(key, value)?,

            ["map", "zoom"] => self.map.zoom = parse_value(key, value)?,
            ["map", "style"] => self.map.style = value.to_string(),
            ["map", "output"] => self.map.output = value.to_string(),
            ["map", "padding_ratio"] => self.map.padding_ratio = parse_value(key, value)?,
            ["map", "lng_fudge_factor"] => self.map.lng_fudge_factor = parse_value(key, value)?,
            ["map", "marker_radius"] => self.map.marker_radius = parse_value(key, value)?,
            ["map", "tile_url"] => self.map.tile_url = value.to_string(),
            ["map", "tiles"] => self.map.tiles = parse_value(key, value)?,
            ["map", "timeout_secs"] => self.map.timeout_secs = parse_value(key, value)?,

            ["roads", "url"] => self.roads.url = value.to_string(),
            ["roads", "interpolate"] => self.roads.interpolate = parse_value(key, value)?,
            ["roads", "timeout_secs"] => self.roads.timeout_secs = parse_value(key, value)?,

            ["export", "format"] => self.export.format = value.to_string(),

            ["api_keys", "google"] => self.api_keys.google = value.to_string(),

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "circle.lat",
            "circle.lng",
            "circle.radius",
            "circle.points",
            "map.zoom",
            "map.style",
            "map.output",
            "map.padding_ratio",
            "map.lng_fudge_factor",
            "map.marker_radius",
            "map.tile_url",
            "map.tiles",
            "map.timeout_secs",
            "roads.url",
            "roads.interpolate",
            "roads.timeout_secs",
            "export.format",
            "api_keys.google",
        ]
    }
}
