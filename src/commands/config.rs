//! Configuration commands
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Validate and store one value

use owo_colors::{OwoColorize, Stream};

use super::print_json;
use crate::config::Config;
use crate::error::Result;
use crate::paths;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let storage_dir = config.storage_dir();

    if json {
        return print_json(&serde_json::json!({
            "storage_dir": storage_dir.to_string_lossy(),
            "theme": config.theme.to_string(),
            "log_level": config.log_level,
            "config_file": Config::config_path().to_string_lossy(),
            "log_file": paths::log_path().to_string_lossy(),
        }));
    }

    let key = |k: &'static str| k.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string();

    let mut text = String::new();
    text.push_str(&format!(
        "{}\n\n",
        "Configuration:".if_supports_color(Stream::Stdout, |s| s.bold())
    ));
    text.push_str(&format!("{}: {}", key("storage_dir"), storage_dir.display()));
    if paths::root_overridden() {
        text.push_str(&format!(" (from ${})", paths::ROOT_ENV));
    } else if config.storage_dir.is_none() {
        text.push_str(" (default)");
    }
    text.push('\n');
    text.push_str(&format!("{}: {}\n", key("theme"), config.theme));
    text.push_str(&format!("{}: {}\n", key("log_level"), config.log_level));
    text.push('\n');
    text.push_str(&format!(
        "Config file: {}\n",
        Config::config_path().display()
    ));
    text.push_str(&format!("Log file: {}", paths::log_path().display()));

    println!("{text}");
    Ok(())
}

pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("Set {} = {}", key, config.get(key)?);
    Ok(())
}
