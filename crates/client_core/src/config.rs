use std::{collections::HashMap, fs, path::Path};

use shared::protocol::DEFAULT_PRECISION;
use tracing::warn;

pub const DEFAULT_ENDPOINT_URL: &str = "https://api.mathjs.org/v4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint_url: String,
    pub precision: u32,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.into(),
            precision: DEFAULT_PRECISION,
            request_timeout_secs: None,
        }
    }
}

/// Defaults, then the optional key/value file, then environment overrides.
pub fn load_settings(path: Option<&Path>) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(path) = path {
        match fs::read_to_string(path) {
            Ok(raw) => apply_file(&mut settings, &raw, path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => warn!(path = %path.display(), "failed to read settings file: {err}"),
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file(settings: &mut ClientSettings, raw: &str, path: &Path) {
    let file_cfg = match toml::from_str::<HashMap<String, toml::Value>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(path = %path.display(), "ignoring malformed settings file: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.get("endpoint_url").and_then(toml::Value::as_str) {
        settings.endpoint_url = v.to_string();
    }
    if let Some(v) = file_cfg.get("precision") {
        match v.as_integer().and_then(|n| u32::try_from(n).ok()) {
            Some(precision) => settings.precision = precision,
            None => warn!("ignoring invalid precision in settings file: {v}"),
        }
    }
    if let Some(v) = file_cfg.get("request_timeout_secs") {
        match v.as_integer().and_then(|n| u64::try_from(n).ok()) {
            Some(secs) => settings.request_timeout_secs = Some(secs),
            None => warn!("ignoring invalid request_timeout_secs in settings file: {v}"),
        }
    }
}

fn apply_env(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CALC_ENDPOINT_URL") {
        settings.endpoint_url = v;
    }
    if let Some(v) = lookup("APP__ENDPOINT_URL") {
        settings.endpoint_url = v;
    }

    if let Some(v) = lookup("APP__PRECISION") {
        match v.parse::<u32>() {
            Ok(parsed) => settings.precision = parsed,
            Err(_) => warn!("ignoring invalid APP__PRECISION={v}"),
        }
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(_) => warn!("ignoring invalid APP__REQUEST_TIMEOUT_SECS={v}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
