use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// A color as it appears in segment configuration: either a 256-color code or
/// a string. A string starting with `$` is an environment-variable
/// indirection, resolved against the snapshot at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Code(u8),
    Name(String),
}

impl ColorValue {
    /// The 256-color code this value stands for, if it parses as one.
    pub fn code(&self) -> Option<u8> {
        match self {
            ColorValue::Code(code) => Some(*code),
            ColorValue::Name(name) => name.trim().parse().ok(),
        }
    }

    /// Interpret a raw JSON value as a color: a number in 0..=255 or any
    /// string. Other shapes, and out-of-range numbers, are no color at all.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(number) => number
                .as_u64()
                .and_then(|code| u8::try_from(code).ok())
                .map(ColorValue::Code),
            serde_json::Value::String(name) => Some(ColorValue::Name(name.clone())),
            _ => None,
        }
    }
}

impl From<u8> for ColorValue {
    fn from(code: u8) -> Self {
        ColorValue::Code(code)
    }
}

impl From<&str> for ColorValue {
    fn from(name: &str) -> Self {
        ColorValue::Name(name.to_string())
    }
}

/// Read-only view of the process environment, captured once per prompt draw
/// and threaded through explicitly so color resolution stays a pure function.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot(HashMap<String, String>);

impl EnvSnapshot {
    pub fn current() -> Self {
        Self(env::vars().collect())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolve a configured color against a theme default.
///
/// A missing value yields the default. A string value starting with `$`
/// names an environment variable (optionally brace-wrapped, `${NAME}`); an
/// unset variable also yields the default. Anything else passes through
/// verbatim.
pub fn resolve_color(configured: Option<&ColorValue>, fallback: u8, env: &EnvSnapshot) -> ColorValue {
    match configured {
        None => ColorValue::Code(fallback),
        Some(ColorValue::Name(name)) if name.starts_with('$') => {
            let var = &name[1..];
            // The braces are stripped one layer from each end independently,
            // never matched as a pair.
            let var = var.strip_prefix('{').unwrap_or(var);
            let var = var.strip_suffix('}').unwrap_or(var);
            match env.get(var) {
                Some(value) => ColorValue::Name(value.to_string()),
                None => ColorValue::Code(fallback),
            }
        }
        Some(other) => other.clone(),
    }
}
