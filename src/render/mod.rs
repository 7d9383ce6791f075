//! Static map rendering
//!
//! Stitches web map tiles covering the plot's bounding box into one image and
//! overlays the center, circle and road layers as markers.

pub mod canvas;
pub mod mercator;
pub mod tiles;

use crate::constants::map::{MARKER_ALPHA, MAX_ZOOM, MIN_ZOOM};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::plot::CirclePlot;
use canvas::Canvas;
use image::{Rgba, RgbaImage};
use mercator::Viewport;
use serde::{Deserialize, Serialize};
use tiles::TileSource;
use tracing::{debug, info};

/// Map imagery style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStyle {
    Satellite,
    Street,
    Terrain,
    /// Road network only, transparent elsewhere
    StreetsOnly,
}

impl TileStyle {
    /// Google `lyrs` code
    pub fn google_code(&self) -> &'static str {
        match self {
            Self::Satellite => "s",
            Self::Street => "m",
            Self::Terrain => "t",
            Self::StreetsOnly => "h",
        }
    }
}

impl Default for TileStyle {
    fn default() -> Self {
        Self::Street
    }
}

impl std::fmt::Display for TileStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satellite => write!(f, "satellite"),
            Self::Street => write!(f, "street"),
            Self::Terrain => write!(f, "terrain"),
            Self::StreetsOnly => write!(f, "streets_only"),
        }
    }
}

impl std::str::FromStr for TileStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "satellite" => Ok(Self::Satellite),
            "street" | "streets" => Ok(Self::Street),
            "terrain" => Ok(Self::Terrain),
            "streets_only" | "streets-only" | "only_streets" => Ok(Self::StreetsOnly),
            _ => Err(format!("Unknown tile style: {}", s)),
        }
    }
}

/// List all tile styles
pub fn available_styles() -> Vec<TileStyle> {
    vec![
        TileStyle::Satellite,
        TileStyle::Street,
        TileStyle::Terrain,
        TileStyle::StreetsOnly,
    ]
}

/// Rendering settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub zoom: u8,
    pub style: TileStyle,
    /// Marker radius in pixels
    pub marker_radius: u32,
    /// Fill for areas not covered by a tile
    pub background: Rgba<u8>,
}

impl MapOptions {
    /// Options with default markers and background
    pub fn new(zoom: u8, style: TileStyle) -> Self {
        Self {
            zoom,
            style,
            marker_radius: 4,
            background: Rgba([242, 239, 233, 255]),
        }
    }

    /// Reject zoom levels outside 1..=20
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(Error::InvalidZoom(format!(
                "Zoom {} is out of range [{}, {}]",
                self.zoom, MIN_ZOOM, MAX_ZOOM
            )));
        }
        Ok(())
    }
}

/// A set of points drawn with one style
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub points: Vec<Coordinates>,
    pub color: Rgba<u8>,
    /// Join consecutive points with a line
    pub connect: bool,
}

/// Layers for a plot, bottom to top: road (if any), circle, center
pub fn plot_layers(plot: &CirclePlot) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(3);

    if let Some(road) = &plot.road {
        layers.push(Layer {
            name: "road",
            points: road.coordinates(),
            color: Rgba([0, 128, 0, MARKER_ALPHA]),
            connect: true,
        });
    }
    layers.push(Layer {
        name: "circle",
        points: plot.circle.clone(),
        color: Rgba([255, 0, 0, MARKER_ALPHA]),
        connect: true,
    });
    layers.push(Layer {
        name: "center",
        points: vec![plot.center],
        color: Rgba([0, 0, 255, MARKER_ALPHA]),
        connect: false,
    });

    layers
}

/// Render a plot onto a map image
///
/// Tiles are fetched one at a time; the first failure aborts the render.
pub async fn render_map<T: TileSource>(
    plot: &CirclePlot,
    options: &MapOptions,
    tiles: &T,
) -> Result<RgbaImage> {
    options.validate()?;

    let viewport = Viewport::from_bounds(&plot.bounds, options.zoom)?;
    let mut canvas = Canvas::new(viewport, options.background);

    let covering = viewport.tiles();
    info!(
        "Rendering {}x{} px map at zoom {} from {} tiles",
        viewport.width,
        viewport.height,
        options.zoom,
        covering.len()
    );

    for (id, offset_x, offset_y) in covering {
        if let Some(tile) = tiles.fetch(id).await? {
            canvas.draw_tile(&tile, offset_x, offset_y);
        }
    }

    for layer in plot_layers(plot) {
        debug!(layer = layer.name, points = layer.points.len(), "Drawing layer");
        if layer.connect {
            canvas.draw_polyline(&layer.points, layer.color);
        }
        for point in &layer.points {
            canvas.draw_marker(*point, options.marker_radius, layer.color);
        }
    }

    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::circle::Framing;
    use crate::coord::CircleSpec;
    use crate::plot::build_plot;
    use crate::render::mercator::TileId;
    use crate::render::tiles::BlankTiles;
    use crate::roads::{SnapOutcome, SnappedPoint};
    use std::str::FromStr;
    use std::sync::Mutex;

    const TILE_GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);

    /// Solid gray tiles, recording what was asked for
    #[derive(Default)]
    struct MockTiles {
        requested: Mutex<Vec<TileId>>,
    }

    impl TileSource for MockTiles {
        async fn fetch(&self, tile: TileId) -> Result<Option<RgbaImage>> {
            self.requested.lock().unwrap().push(tile);
            Ok(Some(RgbaImage::from_pixel(256, 256, TILE_GRAY)))
        }
    }

    /// Fully transparent tiles, like an empty `streets_only` overlay
    struct TransparentTiles;

    impl TileSource for TransparentTiles {
        async fn fetch(&self, _tile: TileId) -> Result<Option<RgbaImage>> {
            Ok(Some(RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 0]))))
        }
    }

    struct FailingTiles;

    impl TileSource for FailingTiles {
        async fn fetch(&self, _tile: TileId) -> Result<Option<RgbaImage>> {
            Err(Error::Render("tile server down".to_string()))
        }
    }

    fn test_plot() -> CirclePlot {
        let spec = CircleSpec::new(Coordinates::new(29.4232653, -98.5041371), 3218.69, 100);
        build_plot(&spec, &Framing::default())
    }

    fn pixel_at(image: &RgbaImage, viewport: &Viewport, coords: Coordinates) -> Rgba<u8> {
        let (x, y) = viewport.to_image(coords);
        *image.get_pixel(x as u32, y as u32)
    }

    #[test]
    fn test_tile_style_from_str() {
        assert_eq!(TileStyle::from_str("satellite").unwrap(), TileStyle::Satellite);
        assert_eq!(TileStyle::from_str("Street").unwrap(), TileStyle::Street);
        assert_eq!(TileStyle::from_str("terrain").unwrap(), TileStyle::Terrain);
        assert_eq!(TileStyle::from_str("only_streets").unwrap(), TileStyle::StreetsOnly);
        assert!(TileStyle::from_str("watercolor").is_err());

        assert_eq!(TileStyle::Street.google_code(), "m");
        assert_eq!(TileStyle::Satellite.google_code(), "s");
        assert_eq!(TileStyle::Terrain.google_code(), "t");
        assert_eq!(TileStyle::StreetsOnly.google_code(), "h");

        for style in available_styles() {
            assert_eq!(TileStyle::from_str(&style.to_string()).unwrap(), style);
        }
    }

    #[test]
    fn test_zoom_validation() {
        assert!(MapOptions::new(1, TileStyle::Street).validate().is_ok());
        assert!(MapOptions::new(20, TileStyle::Street).validate().is_ok());
        assert!(matches!(
            MapOptions::new(0, TileStyle::Street).validate(),
            Err(Error::InvalidZoom(_))
        ));
        assert!(matches!(
            MapOptions::new(21, TileStyle::Street).validate(),
            Err(Error::InvalidZoom(_))
        ));
    }

    #[test]
    fn test_plot_layers_without_road() {
        let layers = plot_layers(&test_plot());
        let names: Vec<&str> = layers.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["circle", "center"]);
        assert_eq!(layers[0].points.len(), 100);
    }

    #[test]
    fn test_plot_layers_with_road() {
        let mut plot = test_plot();
        plot.road = Some(SnapOutcome {
            points: vec![SnappedPoint {
                coords: Coordinates::new(29.45, -98.5),
                original_index: Some(0),
                place_id: None,
            }],
            skipped: 0,
            warning: None,
        });

        let layers = plot_layers(&plot);
        let names: Vec<&str> = layers.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["road", "circle", "center"]);
    }

    #[tokio::test]
    async fn test_render_map() {
        let plot = test_plot();
        let options = MapOptions::new(14, TileStyle::Street);
        let tiles = MockTiles::default();

        let image = render_map(&plot, &options, &tiles).await.unwrap();
        let viewport = Viewport::from_bounds(&plot.bounds, 14).unwrap();

        assert_eq!(image.dimensions(), (viewport.width, viewport.height));
        assert_eq!(tiles.requested.lock().unwrap().len(), viewport.tiles().len());

        // Blue center marker over gray tiles
        let center = pixel_at(&image, &viewport, plot.center);
        assert!(center[2] > center[0] && center[2] > center[1], "{:?}", center);

        // Red circle marker
        let east = pixel_at(&image, &viewport, plot.circle[0]);
        assert!(east[0] > east[1] && east[0] > east[2], "{:?}", east);

        // Untouched corner shows the tile
        assert_eq!(*image.get_pixel(0, 0), TILE_GRAY);
    }

    #[tokio::test]
    async fn test_render_map_blank_tiles() {
        let plot = test_plot();
        let options = MapOptions::new(12, TileStyle::Terrain);

        let image = render_map(&plot, &options, &BlankTiles).await.unwrap();
        assert_eq!(*image.get_pixel(0, 0), options.background);
    }

    #[tokio::test]
    async fn test_render_map_transparent_tiles_show_background() {
        let plot = test_plot();
        let options = MapOptions::new(14, TileStyle::StreetsOnly);

        let image = render_map(&plot, &options, &TransparentTiles).await.unwrap();
        assert_eq!(*image.get_pixel(0, 0), options.background);
        assert_eq!(image.get_pixel(0, 0)[3], 255);
    }

    #[tokio::test]
    async fn test_render_map_draws_road_layer() {
        let mut plot = test_plot();
        let road_point = Coordinates::new(29.44, -98.52);
        plot.road = Some(SnapOutcome {
            points: vec![SnappedPoint {
                coords: road_point,
                original_index: None,
                place_id: None,
            }],
            skipped: 0,
            warning: None,
        });
        let options = MapOptions::new(13, TileStyle::Street);

        let image = render_map(&plot, &options, &BlankTiles).await.unwrap();
        let viewport = Viewport::from_bounds(&plot.bounds, 13).unwrap();

        let pixel = pixel_at(&image, &viewport, road_point);
        assert!(pixel[1] > pixel[0] && pixel[1] > pixel[2], "{:?}", pixel);
    }

    #[tokio::test]
    async fn test_render_map_errors() {
        let plot = test_plot();

        let result = render_map(&plot, &MapOptions::new(25, TileStyle::Street), &BlankTiles).await;
        assert!(matches!(result, Err(Error::InvalidZoom(_))));

        let result = render_map(&plot, &MapOptions::new(10, TileStyle::Street), &FailingTiles).await;
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
