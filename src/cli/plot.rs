//! Plot command handler
//!
//! Generates the circle, snaps it to roads when a key is configured and
//! writes the map image.

use crate::cli::CircleArgs;
use crate::config::Config;
use crate::error::Result;
use crate::plot::{prepare, render_to_file, PlotSettings};
use crate::render::available_styles;
use clap::Args;

/// Plot command arguments
#[derive(Args)]
pub struct PlotArgs {
    #[command(flatten)]
    pub circle: CircleArgs,

    /// Tile zoom level (1-20)
    #[arg(long, short = 'z')]
    pub zoom: Option<u8>,

    /// Tile style: satellite, street, terrain, streets_only
    #[arg(long, short = 's')]
    pub style: Option<String>,

    /// Output image path
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Skip road snapping even when a key is configured
    #[arg(long)]
    pub no_snap: bool,

    /// Draw on a plain background instead of fetching map tiles
    #[arg(long)]
    pub no_tiles: bool,

    /// List available tile styles
    #[arg(long = "list-styles")]
    pub list_styles: bool,
}

impl PlotArgs {
    fn apply(&self, config: &mut Config) {
        self.circle.apply(config);
        if let Some(zoom) = self.zoom {
            config.map.zoom = zoom;
        }
        if let Some(style) = &self.style {
            config.map.style = style.clone();
        }
        if let Some(output) = &self.output {
            config.map.output = output.clone();
        }
        if self.no_snap {
            config.api_keys.google.clear();
        }
        if self.no_tiles {
            config.map.tiles = false;
        }
    }
}

/// Run the plot command
pub async fn run(args: PlotArgs) -> Result<()> {
    if args.list_styles {
        println!("Available tile styles:");
        for style in available_styles() {
            println!("  {}", style);
        }
        return Ok(());
    }

    let mut config = Config::load()?;
    args.apply(&mut config);
    let settings = PlotSettings::from_config(&config)?;

    let plot = prepare(&settings.circle).await?;
    render_to_file(&plot, &settings, &settings.output).await?;

    eprintln!("Map written to {}", settings.output.display());
    Ok(())
}
