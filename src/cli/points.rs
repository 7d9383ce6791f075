//! Points command handler
//!
//! Prints the generated circle (and snapped road points) in an export format.

use crate::cli::CircleArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::plot::{prepare, CircleSettings};
use clap::Args;

/// Points command arguments
#[derive(Args)]
pub struct PointsArgs {
    #[command(flatten)]
    pub circle: CircleArgs,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Snap points to roads (requires an API key)
    #[arg(long)]
    pub snap: bool,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the points command
pub async fn run(args: PointsArgs) -> Result<()> {
    if args.list_formats {
        println!("Available output formats:");
        for format in available_formats() {
            println!("  {:6} - {}", format.name, format.description);
        }
        return Ok(());
    }

    let mut config = Config::load()?;
    args.circle.apply(&mut config);
    if !args.snap {
        config.api_keys.google.clear();
    }
    // Map options play no part in exporting points
    let settings = CircleSettings::from_config(&config)?;

    if args.snap && settings.credential.is_none() {
        return Err(Error::Config(
            "--snap needs an API key (--api-key or api_keys.google)".to_string(),
        ));
    }

    let format = args.format.unwrap_or(config.export.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let plot = prepare(&settings).await?;
    let output = formatter.format(&plot)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
