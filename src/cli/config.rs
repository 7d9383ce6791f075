//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "circle.radius")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        (None, None) => {
            print!("{}", render_config(&config));
        }

        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| unknown_key(key))?;
            if key == "api_keys.google" {
                println!("{}", mask_key(&value));
            } else {
                println!("{}", value);
            }
        }

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config(
                "Must specify a key to set a value".to_string(),
            ));
        }
    }

    Ok(())
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {}\n\nAvailable keys:\n  {}",
        key,
        Config::available_keys().join("\n  ")
    ))
}

fn mask_key(value: &str) -> &'static str {
    if value.trim().is_empty() {
        "\"\" # not configured, road snapping disabled"
    } else {
        "\"***\" # configured"
    }
}

/// All configuration values grouped by section, API key masked
fn render_config(config: &Config) -> String {
    let mut out = String::new();
    let mut section = "";

    for key in Config::available_keys() {
        let (prefix, name) = key.split_once('.').unwrap_or(("", key));
        if prefix != section {
            if !section.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", prefix));
            section = prefix;
        }

        let value = config.get(key).unwrap_or_default();
        let shown = if key == "api_keys.google" {
            mask_key(&value).to_string()
        } else if value.parse::<f64>().is_ok() || value == "true" || value == "false" {
            value
        } else {
            format!("\"{}\"", value)
        };
        out.push_str(&format!("{} = {}\n", name, shown));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_sections() {
        let output = render_config(&Config::default());

        assert!(output.starts_with("[circle]\n"));
        assert!(output.contains("\n[map]\n"));
        assert!(output.contains("radius = 3218.69\n"));
        assert!(output.contains("style = \"street\"\n"));
        assert!(output.contains("tiles = true\n"));
        assert!(output.contains("google = \"\" # not configured"));
    }

    #[test]
    fn test_render_config_masks_key() {
        let mut config = Config::default();
        config.api_keys.google = "super-secret".to_string();

        let output = render_config(&config);
        assert!(!output.contains("super-secret"));
        assert!(output.contains("google = \"***\""));
    }

    #[test]
    fn test_unknown_key_lists_keys() {
        let message = unknown_key("nope").to_string();
        assert!(message.contains("nope"));
        assert!(message.contains("circle.radius"));
    }
}
