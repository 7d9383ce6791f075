//! Plot pipeline
//!
//! Resolves configuration into immutable settings, generates the circle,
//! optionally snaps it to roads and renders the map image.

use crate::config::Config;
use crate::coord::circle::{generate_circle, Framing};
use crate::coord::{BoundingBox, CircleSpec, Coordinates};
use crate::error::{Error, Result};
use crate::render::tiles::{BlankTiles, GoogleTiles};
use crate::render::{render_map, MapOptions, TileStyle};
use crate::roads::google::{GoogleRoadsClient, RoadsOptions};
use crate::roads::{ApiKey, RoadSnapper, SnapOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Settings for generating and snapping the circle
#[derive(Debug, Clone)]
pub struct CircleSettings {
    pub spec: CircleSpec,
    pub framing: Framing,
    /// Road snapping runs only when a key is present
    pub credential: Option<ApiKey>,
    pub roads: RoadsOptions,
}

impl CircleSettings {
    /// Resolve and validate the circle and road settings of a configuration
    ///
    /// Map rendering settings are not looked at.
    pub fn from_config(config: &Config) -> Result<Self> {
        let spec = CircleSpec::new(
            Coordinates::new(config.circle.lat, config.circle.lng),
            config.circle.radius,
            config.circle.points,
        );
        spec.validate()?;

        if !(config.map.padding_ratio >= 0.0) || !(config.map.lng_fudge_factor >= 0.0) {
            return Err(Error::Config(
                "map.padding_ratio and map.lng_fudge_factor must be non-negative".to_string(),
            ));
        }

        Ok(Self {
            spec,
            framing: Framing {
                padding_ratio: config.map.padding_ratio,
                lng_fudge_factor: config.map.lng_fudge_factor,
            },
            credential: ApiKey::from_config(&config.api_keys.google),
            roads: RoadsOptions {
                url: config.roads.url.clone(),
                interpolate: config.roads.interpolate,
                timeout_secs: config.roads.timeout_secs,
            },
        })
    }
}

/// Everything a map run needs, fixed before any work starts
#[derive(Debug, Clone)]
pub struct PlotSettings {
    pub circle: CircleSettings,
    pub map: MapOptions,
    /// Tile URL template; None renders on a plain background
    pub tile_url: Option<String>,
    pub tile_timeout_secs: u64,
    pub output: PathBuf,
}

impl PlotSettings {
    /// Resolve and validate settings from a configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let circle = CircleSettings::from_config(config)?;

        let style = TileStyle::from_str(&config.map.style).map_err(Error::Config)?;
        let mut map = MapOptions::new(config.map.zoom, style);
        map.marker_radius = config.map.marker_radius;
        map.validate()?;

        Ok(Self {
            circle,
            map,
            tile_url: config.map.tiles.then(|| config.map.tile_url.clone()),
            tile_timeout_secs: config.map.timeout_secs,
            output: PathBuf::from(&config.map.output),
        })
    }
}

/// A generated circle with its map frame and optional road points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CirclePlot {
    pub center: Coordinates,
    pub radius_meters: f64,
    pub bounds: BoundingBox,
    pub circle: Vec<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<SnapOutcome>,
    pub generated_at: DateTime<Utc>,
}

/// Generate the circle and its bounding box
pub fn build_plot(spec: &CircleSpec, framing: &Framing) -> CirclePlot {
    let circle = generate_circle(spec);
    let bounds = framing.bounding_box(spec);
    info!(
        "Generated {} points at {} m around {}",
        circle.len(),
        spec.radius_meters,
        spec.center
    );

    CirclePlot {
        center: spec.center,
        radius_meters: spec.radius_meters,
        bounds,
        circle,
        road: None,
        generated_at: Utc::now(),
    }
}

/// Snap the plot's circle to roads and attach the result
pub async fn snap_roads<S: RoadSnapper>(plot: &mut CirclePlot, snapper: &S) -> Result<()> {
    let outcome = snapper.snap(&plot.circle).await?;
    plot.road = Some(outcome);
    Ok(())
}

/// Build the plot and snap it to roads when a credential is configured
pub async fn prepare(settings: &CircleSettings) -> Result<CirclePlot> {
    let mut plot = build_plot(&settings.spec, &settings.framing);

    match &settings.credential {
        Some(key) => {
            let client = GoogleRoadsClient::new(key.clone(), settings.roads.clone())?;
            snap_roads(&mut plot, &client).await?;
        }
        None => info!("No API key configured, skipping road snapping"),
    }

    Ok(plot)
}

/// Render the plot and write it to `path` (format from the extension)
pub async fn render_to_file(plot: &CirclePlot, settings: &PlotSettings, path: &Path) -> Result<()> {
    let image = match &settings.tile_url {
        Some(template) => {
            let tiles =
                GoogleTiles::with_template(template, settings.map.style, settings.tile_timeout_secs)?;
            render_map(plot, &settings.map, &tiles).await?
        }
        None => render_map(plot, &settings.map, &BlankTiles).await?,
    };

    image.save(path)?;
    info!("Wrote map image to {}", path.display());
    Ok(())
}
