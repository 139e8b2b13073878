use crate::config::{Config, ConfigError};
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tokio::fs;

/// Load configuration with priority: CLI args > Env vars > Config files > Defaults
pub async fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = if let Some(path) = config_path {
        load_config_file(&path).await?
    } else {
        load_config_from_default_locations().await
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Try the default locations in order; a broken file warns and falls through
/// to the next one, so a bad config never blocks the prompt.
async fn load_config_from_default_locations() -> Config {
    for path in get_config_search_paths() {
        if path.exists() {
            match load_config_file(&path).await {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
    }

    Config::default()
}

fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Current directory
    paths.push(PathBuf::from(".promptline.json"));

    // User home directory
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".promptline.json"));
        paths.push(home.join(".config").join("promptline").join("config.json"));
    }

    paths
}

pub async fn load_config_file(path: &PathBuf) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).await.map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(theme) = env::var("PROMPTLINE_THEME") {
        config.theme = theme;
    }
}
