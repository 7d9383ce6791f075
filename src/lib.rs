//! circle-plot: GPS circle map plotter
//!
//! A library and CLI tool that places evenly spaced points on a circle around
//! a geographic center, optionally snaps them to roads with the Google Roads
//! API, and renders everything onto a static map image built from web tiles.
//!
//! ## Features
//!
//! - Equirectangular circle point generation and map framing
//! - Road snapping with batched snapToRoads requests
//! - Web Mercator tile stitching with marker overlays
//! - Text, JSON and GPX export
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_plot::coord::circle::{generate_circle, Framing};
//! use circle_plot::coord::{CircleSpec, Coordinates};
//!
//! let center = Coordinates::new(29.4232653, -98.5041371); // San Antonio
//! let spec = CircleSpec::new(center, 3218.69, 100); // 2 miles, 100 points
//!
//! let points = generate_circle(&spec);
//! assert_eq!(points.len(), 100);
//!
//! let bounds = Framing::default().bounding_box(&spec);
//! assert!(bounds.contains(center));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod plot;
pub mod render;
pub mod roads;

// Re-export commonly used types
pub use config::Config;
pub use coord::{BoundingBox, CircleSpec, Coordinates};
pub use error::{Error, Result};
pub use plot::{CirclePlot, CircleSettings, PlotSettings};
