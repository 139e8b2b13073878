pub mod defaults;
pub mod loader;

pub use defaults::*;
pub use loader::*;

use crate::utils::ColorValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
}

pub fn default_theme_name() -> String {
    "default".to_string()
}

/// One entry of the ordered segment list. Prompt order is list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentDef {
    Cwd(CwdConfig),
    Git(GitConfig),
    GitStash(GitStashConfig),
    Cmd(CmdConfig),
    ExitCode(ExitCodeConfig),
    Time(TimeConfig),
}

/// Per-segment color overrides. Either value may be a 256-color code, a
/// plain string, or a `$VAR` environment indirection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorOverride {
    #[serde(default, deserialize_with = "lenient_color")]
    pub fg_color: Option<ColorValue>,
    #[serde(default, deserialize_with = "lenient_color")]
    pub bg_color: Option<ColorValue>,
}

/// Colors fail soft the same way `command` does: a value that is neither a
/// 256-color code nor a string is ignored, never an abort of config loading.
fn lenient_color<'de, D>(deserializer: D) -> Result<Option<ColorValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(ColorValue::from_json(&value))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CwdConfig {
    #[serde(default)]
    pub basename_only: bool,
    #[serde(flatten)]
    pub colors: ColorOverride,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(flatten)]
    pub colors: ColorOverride,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitStashConfig {
    #[serde(flatten)]
    pub colors: ColorOverride,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmdConfig {
    /// The command to run: a string split with POSIX shell-word rules, or an
    /// array of strings used as the argv verbatim. Kept as a raw JSON value
    /// so that a malformed type degrades to "no output" instead of aborting
    /// config loading.
    #[serde(default)]
    pub command: Option<serde_json::Value>,
    #[serde(flatten)]
    pub colors: ColorOverride,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExitCodeConfig {
    #[serde(flatten)]
    pub colors: ColorOverride,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeConfig {
    #[serde(flatten)]
    pub colors: ColorOverride,
}
