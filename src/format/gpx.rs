//! GPX output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::plot::CirclePlot;

/// GPX formatter - outputs a GPX waypoint file
pub struct GpxFormatter;

fn waypoint(gpx: &mut String, lat: f64, lng: f64, name: &str, sym: &str) {
    gpx.push_str(&format!(r#"  <wpt lat="{}" lon="{}">"#, lat, lng));
    gpx.push('\n');
    gpx.push_str(&format!("    <name>{}</name>\n", name));
    gpx.push_str(&format!("    <sym>{}</sym>\n", sym));
    gpx.push_str("  </wpt>\n");
}

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, plot: &CirclePlot) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="circle-plot">"#);
        gpx.push('\n');

        // Metadata
        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!(
            "    <name>{} m circle around {}</name>\n",
            plot.radius_meters, plot.center
        ));
        gpx.push_str(&format!("    <time>{}</time>\n", plot.generated_at.to_rfc3339()));
        gpx.push_str(&format!(
            r#"    <bounds minlat="{}" minlon="{}" maxlat="{}" maxlon="{}"/>"#,
            plot.bounds.south(),
            plot.bounds.west(),
            plot.bounds.north(),
            plot.bounds.east()
        ));
        gpx.push('\n');
        gpx.push_str("  </metadata>\n");

        waypoint(&mut gpx, plot.center.lat, plot.center.lng, "Center", "flag");

        for (i, point) in plot.circle.iter().enumerate() {
            waypoint(&mut gpx, point.lat, point.lng, &format!("Circle {}", i), "circle");
        }

        if let Some(road) = &plot.road {
            for (i, point) in road.points.iter().enumerate() {
                waypoint(
                    &mut gpx,
                    point.coords.lat,
                    point.coords.lng,
                    &format!("Road {}", i),
                    "road",
                );
            }
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}
