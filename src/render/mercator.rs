//! Web Mercator projection
//!
//! Converts coordinates to "world pixels": the pixel grid obtained by laying
//! out every tile of a zoom level side by side, origin at the north-west
//! corner.

use crate::constants::geo::MERCATOR_MAX_LAT;
use crate::constants::map::{MAX_IMAGE_DIMENSION, TILE_SIZE};
use crate::coord::{BoundingBox, Coordinates};
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Address of one map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// World size in pixels at a zoom level
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE as f64 * 2f64.powi(zoom as i32)
}

/// Project a coordinate to world pixels
///
/// Latitude is clamped to the Mercator limit.
pub fn world_pixel(coords: Coordinates, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = coords.lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT) * PI / 180.0;

    let x = (coords.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Pixel window of a map image within the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: u8,
    /// World pixel of the image's left edge
    pub left: f64,
    /// World pixel of the image's top edge
    pub top: f64,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Frame a bounding box at the given zoom
    pub fn from_bounds(bounds: &BoundingBox, zoom: u8) -> Result<Self> {
        let (left, top) = world_pixel(Coordinates::new(bounds.north(), bounds.west()), zoom);
        let (right, bottom) = world_pixel(Coordinates::new(bounds.south(), bounds.east()), zoom);

        let width = (right - left).ceil();
        let height = (bottom - top).ceil();

        if !(width >= 1.0 && height >= 1.0) {
            return Err(Error::Render(format!(
                "Map area is empty ({}x{} px at zoom {})",
                width, height, zoom
            )));
        }
        if width > MAX_IMAGE_DIMENSION as f64 || height > MAX_IMAGE_DIMENSION as f64 {
            return Err(Error::Render(format!(
                "Map would be {}x{} px at zoom {}; limit is {} px per side, use a lower zoom",
                width, height, zoom, MAX_IMAGE_DIMENSION
            )));
        }

        Ok(Self {
            zoom,
            left,
            top,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Position of a coordinate in image pixels (may fall outside the image)
    pub fn to_image(&self, coords: Coordinates) -> (f64, f64) {
        let (x, y) = world_pixel(coords, self.zoom);
        (x - self.left, y - self.top)
    }

    /// Tiles covering the viewport, each with its image-space offset
    ///
    /// Column indices wrap around the antimeridian; rows outside the world
    /// are left out.
    pub fn tiles(&self) -> Vec<(TileId, i64, i64)> {
        let tile = TILE_SIZE as f64;
        let count = 1i64 << self.zoom;

        let first_col = (self.left / tile).floor() as i64;
        let last_col = ((self.left + self.width as f64 - 1.0) / tile).floor() as i64;
        let first_row = ((self.top / tile).floor() as i64).max(0);
        let last_row = (((self.top + self.height as f64 - 1.0) / tile).floor() as i64).min(count - 1);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let id = TileId {
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    z: self.zoom,
                };
                let offset_x = (col as f64 * tile - self.left).round() as i64;
                let offset_y = (row as f64 * tile - self.top).round() as i64;
                tiles.push((id, offset_x, offset_y));
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_pixel_origin_and_corners() {
        let (x, y) = world_pixel(Coordinates::new(0.0, 0.0), 1);
        assert_relative_eq!(x, 256.0, epsilon = 1e-9);
        assert_relative_eq!(y, 256.0, epsilon = 1e-9);

        let (x, y) = world_pixel(Coordinates::new(MERCATOR_MAX_LAT, -180.0), 1);
        assert_relative_eq!(x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(y, 0.0, epsilon = 1e-3);

        // Clamped at the pole
        let (_, y) = world_pixel(Coordinates::new(90.0, 0.0), 1);
        assert!(y.is_finite());
    }

    #[test]
    fn test_viewport_dimensions() {
        let bounds = BoundingBox {
            lat_min: -1.0,
            lat_max: 1.0,
            lng_min: -1.0,
            lng_max: 1.0,
        };
        let viewport = Viewport::from_bounds(&bounds, 10).unwrap();

        // 2 degrees of longitude at zoom 10 = 2/360 * 262144 px
        assert_eq!(viewport.width, (2.0 / 360.0 * 262_144.0f64).ceil() as u32);
        assert!(viewport.height >= viewport.width);

        let (x, y) = viewport.to_image(Coordinates::new(0.0, 0.0));
        assert_relative_eq!(x, (2.0 / 360.0 * 262_144.0) / 2.0, epsilon = 1e-6);
        assert!(y > 0.0 && y < viewport.height as f64);
    }

    #[test]
    fn test_viewport_rejects_oversized_and_empty() {
        let big = BoundingBox {
            lat_min: -10.0,
            lat_max: 10.0,
            lng_min: -10.0,
            lng_max: 10.0,
        };
        assert!(matches!(Viewport::from_bounds(&big, 18), Err(Error::Render(_))));

        let empty = BoundingBox {
            lat_min: 5.0,
            lat_max: 5.0,
            lng_min: 5.0,
            lng_max: 5.0,
        };
        assert!(matches!(Viewport::from_bounds(&empty, 5), Err(Error::Render(_))));
    }

    #[test]
    fn test_viewport_tiles_cover_image() {
        let viewport = Viewport {
            zoom: 3,
            left: 300.0,
            top: 100.0,
            width: 400,
            height: 200,
        };
        let tiles = viewport.tiles();

        // Columns 1..=2, rows 0..=1
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0], (TileId { x: 1, y: 0, z: 3 }, -44, -100));
        assert_eq!(tiles[3], (TileId { x: 2, y: 1, z: 3 }, 212, 156));
    }

    #[test]
    fn test_viewport_tiles_wrap_antimeridian() {
        let viewport = Viewport {
            zoom: 1,
            left: -100.0,
            top: 0.0,
            width: 200,
            height: 100,
        };
        let columns: Vec<u32> = viewport.tiles().iter().map(|(id, _, _)| id.x).collect();
        assert_eq!(columns, vec![1, 0]);
    }
}
