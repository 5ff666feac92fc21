use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Load configuration with priority: CLI args > Env vars > Config files > Defaults
pub async fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = if let Some(path) = config_path {
        load_config_file(&path).await?
    } else {
        load_config_from_default_locations().await?
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

async fn load_config_from_default_locations() -> Result<Config> {
    for path in get_config_search_paths() {
        if path.exists() {
            match load_config_file(&path).await {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    return Ok(config);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load config");
                }
            }
        }
    }

    Ok(Config::default())
}

fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".statusline.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("statusline").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".statusline.json"));
    }

    paths
}

/// Load configuration from a specific file
pub async fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(theme) = env::var("STATUSLINE_THEME") {
        config.theme = theme;
    }

    if let Ok(glyphs) = env::var("STATUSLINE_GLYPHS") {
        match glyphs.parse() {
            Ok(style) => config.glyphs = style,
            Err(e) => warn!(error = %e, "ignoring STATUSLINE_GLYPHS"),
        }
    }

    if let Ok(width) = env::var("STATUSLINE_WIDTH") {
        match width.parse() {
            Ok(width) => config.width = Some(width),
            Err(_) => warn!(value = %width, "ignoring non-numeric STATUSLINE_WIDTH"),
        }
    }
}
