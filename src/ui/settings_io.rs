use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use crate::observability::messages::SettingsFallback;
use crate::ui::settings::AppSettings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("node_studio");
    path.push("settings.json");
    path
}

pub fn read_settings(path: &Path) -> anyhow::Result<AppSettings> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Load from `path`, falling back to defaults when the file is absent or unusable.
pub fn load_settings_from(path: &Path) -> AppSettings {
    if !path.exists() {
        return AppSettings::default();
    }
    match read_settings(path) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(error) => {
            warn!("{}", SettingsFallback { path, error: &error });
            AppSettings::default()
        }
    }
}

pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &AppSettings) -> anyhow::Result<()> {
    let path = settings_path();
    write_settings(&path, settings)?;
    info!(path = %path.display(), "saved settings");
    Ok(())
}
