//! circle-plot CLI entry point
//!
//! Circle-of-points map plotter with optional road snapping

use circle_plot::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
