//! Board configuration from a TOML file. Missing keys keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;

use shooter_sim::BoardConfig;

/// Load and validate a config file, or the defaults when `path` is `None`.
pub fn load_board_config(path: Option<&Path>) -> anyhow::Result<BoardConfig> {
    let Some(path) = path else {
        return Ok(BoardConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_board_config(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse_board_config(text: &str) -> anyhow::Result<BoardConfig> {
    let config: BoardConfig = toml::from_str(text).context("failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}
