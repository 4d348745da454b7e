use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

const SETTINGS_DIR: &str = "epc-nexus";
const SETTINGS_FILE: &str = "settings.json";

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Build a settings load result from explicit parts.
    pub(crate) fn new(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load settings for start-up, falling back to defaults on any failure.
///
/// A missing file is seeded with the defaults so it can be edited by hand.
pub(crate) fn load_initial_settings() -> SettingsData {
    load_initial_settings_from_path(&settings_path())
}

fn load_initial_settings_from_path(path: &Path) -> SettingsData {
    let load = match load_settings_from_path(path) {
        Ok(load) => load,
        Err(err) => {
            log::warn!("settings read failed for {}: {err}", path.display());
            return SettingsData::default();
        },
    };

    let (settings, status) = load.into_parts();
    match status {
        SettingsLoadStatus::Loaded => {
            log::info!("settings loaded from {}", path.display());
        },
        SettingsLoadStatus::Missing => {
            log::info!(
                "settings not found at {}, writing defaults",
                path.display()
            );
            if let Err(err) = save_settings_to_path(path, &settings) {
                log::warn!(
                    "settings seed failed for {}: {err}",
                    path.display()
                );
            }
        },
        SettingsLoadStatus::Invalid(message) => {
            log::warn!("settings file invalid: {message}");
        },
    }

    settings
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(SettingsLoad::new(
        SettingsData::from_json(&parsed),
        SettingsLoadStatus::Loaded,
    ))
}

fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(SETTINGS_DIR)
            .join(SETTINGS_FILE);
    }

    std::env::temp_dir().join(SETTINGS_DIR).join(SETTINGS_FILE)
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
