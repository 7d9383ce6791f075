//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::plot::CirclePlot;

/// JSON formatter - outputs the full plot as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full plot as JSON"
    }

    fn format(&self, plot: &CirclePlot) -> Result<String> {
        Ok(serde_json::to_string_pretty(plot)?)
    }
}
