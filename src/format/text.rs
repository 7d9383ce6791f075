//! Human-readable text formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::plot::CirclePlot;
use std::fmt::Write;

/// Text formatter - summary followed by one `lat,lng` line per point
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable summary and point list"
    }

    fn format(&self, plot: &CirclePlot) -> Result<String> {
        let mut out = String::new();
        let b = &plot.bounds;

        // Writing to a String cannot fail
        let _ = writeln!(out, "Center: {:.7}, {:.7}", plot.center.lat, plot.center.lng);
        let _ = writeln!(out, "Radius: {} m", plot.radius_meters);
        let _ = writeln!(
            out,
            "Bounds: W {:.6} E {:.6} S {:.6} N {:.6}",
            b.west(),
            b.east(),
            b.south(),
            b.north()
        );

        let _ = writeln!(out, "\nCircle points ({}):", plot.circle.len());
        for point in &plot.circle {
            let _ = writeln!(out, "  {:.7},{:.7}", point.lat, point.lng);
        }

        if let Some(road) = &plot.road {
            let _ = writeln!(
                out,
                "\nRoad points ({}, {} skipped):",
                road.points.len(),
                road.skipped
            );
            for point in &road.points {
                let _ = writeln!(out, "  {:.7},{:.7}", point.coords.lat, point.coords.lng);
            }
            if let Some(warning) = &road.warning {
                let _ = writeln!(out, "  warning: {}", warning);
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support;

    #[test]
    fn test_text_format() {
        let output = TextFormatter.format(&test_support::plot(false)).unwrap();

        assert!(output.starts_with("Center: 29.4232653, -98.5041371\n"));
        assert!(output.contains("Radius: 3218.69 m"));
        assert!(output.contains("Circle points (8):"));
        assert!(output.contains("  29.4232653,-98.4709413\n"));
        assert!(!output.contains("Road points"));
    }

    #[test]
    fn test_text_format_with_road() {
        let output = TextFormatter.format(&test_support::plot(true)).unwrap();

        assert!(output.contains("Road points (2, 1 skipped):"));
        assert!(output.contains("  29.4500000,-98.4700000\n"));
    }
}
