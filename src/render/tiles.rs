//! Map tile sources
//!
//! A tile source turns a tile address into a decoded image. The Google source
//! fetches raster tiles over HTTP; the blank source supplies nothing, leaving
//! the canvas background (useful offline).

use crate::constants::api::{GOOGLE_TILE_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::render::mercator::TileId;
use crate::render::TileStyle;
use image::RgbaImage;
use std::time::Duration;
use tracing::debug;

/// Trait for map tile backends
pub trait TileSource: Send + Sync {
    /// Fetch and decode a tile
    ///
    /// Returns None when the source has no imagery to offer.
    fn fetch(
        &self,
        tile: TileId,
    ) -> impl std::future::Future<Output = Result<Option<RgbaImage>>> + Send;
}

/// Google map tiles
#[derive(Debug, Clone)]
pub struct GoogleTiles {
    client: reqwest::Client,
    template: String,
    style: TileStyle,
}

impl GoogleTiles {
    /// Create a tile source with the default Google URL template
    pub fn new(style: TileStyle, timeout_secs: u64) -> Result<Self> {
        Self::with_template(GOOGLE_TILE_URL, style, timeout_secs)
    }

    /// Create a tile source with a custom URL template
    ///
    /// The template may use `{style}`, `{x}`, `{y}` and `{z}` placeholders.
    pub fn with_template(template: &str, style: TileStyle, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            template: template.to_string(),
            style,
        })
    }

    /// URL of a single tile
    pub fn tile_url(&self, tile: TileId) -> String {
        self.template
            .replace("{style}", self.style.google_code())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
            .replace("{z}", &tile.z.to_string())
    }
}

impl TileSource for GoogleTiles {
    async fn fetch(&self, tile: TileId) -> Result<Option<RgbaImage>> {
        let url = self.tile_url(tile);
        debug!("Fetching tile {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Render(format!("Tile request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Render(format!(
                "Tile server returned status {} for z={} x={} y={}",
                response.status(),
                tile.z,
                tile.x,
                tile.y
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Render(format!("Failed to read tile: {}", e)))?;

        Ok(Some(image::load_from_memory(&bytes)?.to_rgba8()))
    }
}

/// Tile source with no imagery
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankTiles;

impl TileSource for BlankTiles {
    async fn fetch(&self, _tile: TileId) -> Result<Option<RgbaImage>> {
        Ok(None)
    }
}
