//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod plot;
pub mod points;

use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Plot a circle of GPS points on a map, optionally snapped to roads
#[derive(Parser)]
#[command(name = "circle-plot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the circle and render it to a map image
    Plot(plot::PlotArgs),

    /// Generate the circle and print its points
    Points(points::PointsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Circle options shared by `plot` and `points`
#[derive(Args, Debug, Default)]
pub struct CircleArgs {
    /// Center latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Center longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Radius in meters
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Number of points on the circle
    #[arg(long, short = 'n')]
    pub points: Option<usize>,

    /// Google Roads API key (overrides api_keys.google)
    #[arg(long)]
    pub api_key: Option<String>,
}

impl CircleArgs {
    /// Apply the flags given on the command line over the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(lat) = self.lat {
            config.circle.lat = lat;
        }
        if let Some(lng) = self.lng {
            config.circle.lng = lng;
        }
        if let Some(radius) = self.radius {
            config.circle.radius = radius;
        }
        if let Some(points) = self.points {
            config.circle.points = points;
        }
        if let Some(key) = &self.api_key {
            config.api_keys.google = key.clone();
        }
    }
}

/// Initialize logging to stderr; RUST_LOG overrides the default level
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Plot(args) => plot::run(args).await,
        Commands::Points(args) => points::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plot_args() {
        let cli = Cli::try_parse_from([
            "circle-plot",
            "plot",
            "--lat",
            "-33.9",
            "--lng",
            "18.4",
            "-r",
            "1500",
            "--zoom",
            "15",
            "--style",
            "satellite",
            "--no-tiles",
        ])
        .unwrap();

        match cli.command {
            Commands::Plot(args) => {
                assert_eq!(args.circle.lat, Some(-33.9));
                assert_eq!(args.circle.radius, Some(1500.0));
                assert_eq!(args.zoom, Some(15));
                assert!(args.no_tiles);
            }
            _ => panic!("expected plot command"),
        }
    }

    #[test]
    fn test_circle_args_apply() {
        let mut config = Config::default();
        let args = CircleArgs {
            lat: Some(10.0),
            points: Some(12),
            api_key: Some("k".to_string()),
            ..CircleArgs::default()
        };
        args.apply(&mut config);

        assert_eq!(config.circle.lat, 10.0);
        assert_eq!(config.circle.lng, -98.5041371);
        assert_eq!(config.circle.points, 12);
        assert_eq!(config.api_keys.google, "k");
    }
}
