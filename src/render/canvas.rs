//! Raster canvas
//!
//! Tiles, markers and lines are all alpha-blended over the background.

use crate::coord::Coordinates;
use crate::render::mercator::Viewport;
use image::{imageops, Pixel, Rgba, RgbaImage};

/// Image being drawn for a viewport
pub struct Canvas {
    viewport: Viewport,
    image: RgbaImage,
}

impl Canvas {
    /// Blank canvas filled with `background`
    pub fn new(viewport: Viewport, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(viewport.width, viewport.height, background),
            viewport,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Composite a tile onto the canvas at an image-space offset
    ///
    /// Transparent tile pixels (the `streets_only` overlay) keep the
    /// background underneath.
    pub fn draw_tile(&mut self, tile: &RgbaImage, offset_x: i64, offset_y: i64) {
        imageops::overlay(&mut self.image, tile, offset_x, offset_y);
    }

    /// Filled circular marker centred on a coordinate
    pub fn draw_marker(&mut self, coords: Coordinates, radius: u32, color: Rgba<u8>) {
        let (cx, cy) = self.viewport.to_image(coords);
        let r = radius as f64;

        let min_x = (cx - r).floor() as i64;
        let max_x = (cx + r).ceil() as i64;
        let min_y = (cy - r).floor() as i64;
        let max_y = (cy + r).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Straight segments joining the coordinates in order
    pub fn draw_polyline(&mut self, points: &[Coordinates], color: Rgba<u8>) {
        for pair in points.windows(2) {
            let (x0, y0) = self.viewport.to_image(pair[0]);
            let (x1, y1) = self.viewport.to_image(pair[1]);
            self.draw_line(
                (x0.round() as i64, y0.round() as i64),
                (x1.round() as i64, y1.round() as i64),
                color,
            );
        }
    }

    /// Bresenham line; each pixel is blended once
    fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgba<u8>) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.get_pixel_mut(x as u32, y as u32).blend(&color);
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
