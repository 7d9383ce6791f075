//! Output formatters
//!
//! Provides trait-based export of a generated plot's points.

pub mod gpx;
pub mod json;
pub mod text;

use crate::error::Result;
use crate::plot::CirclePlot;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the plot
    fn format(&self, plot: &CirclePlot) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "gpx" => Some(Box::new(gpx::GpxFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    let formatters: [&dyn OutputFormatter; 3] = [
        &json::JsonFormatter,
        &text::TextFormatter,
        &gpx::GpxFormatter,
    ];

    formatters
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::coord::circle::Framing;
    use crate::coord::{CircleSpec, Coordinates};
    use crate::plot::{build_plot, CirclePlot};
    use crate::roads::{SnapOutcome, SnappedPoint};

    pub fn plot(with_road: bool) -> CirclePlot {
        let spec = CircleSpec::new(Coordinates::new(29.4232653, -98.5041371), 3218.69, 8);
        let mut plot = build_plot(&spec, &Framing::default());
        if with_road {
            plot.road = Some(SnapOutcome {
                points: vec![
                    SnappedPoint {
                        coords: Coordinates::new(29.45, -98.47),
                        original_index: Some(0),
                        place_id: Some("ChIJ-road".to_string()),
                    },
                    SnappedPoint {
                        coords: Coordinates::new(29.451, -98.472),
                        original_index: None,
                        place_id: None,
                    },
                ],
                skipped: 1,
                warning: None,
            });
        }
        plot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_some());
        assert!(get_formatter("unknown").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
        assert!(get_formatter("GPX").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 3);
        for format in &formats {
            assert!(get_formatter(&format.name).is_some());
            assert!(!format.description.is_empty());
        }
    }
}
