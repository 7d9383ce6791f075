//! Error types for circle-plot

use thiserror::Error;

/// Main error type for circle-plot operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Invalid point count: {0}")]
    InvalidPointCount(String),

    #[error("Invalid zoom level: {0}")]
    InvalidZoom(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Road snapping error: {0}")]
    RoadSnap(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for circle-plot operations
pub type Result<T> = std::result::Result<T, Error>;
