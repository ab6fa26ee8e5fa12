//! Settings file loading functions.

use std::path::Path;

use super::{
    ConfigError,
    DisplaySettings,
};

/// Name of the optional settings file looked up in the application directory.
const SETTINGS_FILE_NAME: &str = "office-i18n.json";

/// Reads `office-i18n.json` from a directory.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: file not found
/// - `Err(ConfigError)`: read or parse failure
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<DisplaySettings>, ConfigError> {
    let settings_path = dir.join(SETTINGS_FILE_NAME);

    if !settings_path.exists() {
        tracing::debug!("Settings file not found: {:?}", settings_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", settings_path);

    let content = std::fs::read_to_string(&settings_path)?;
    let settings: DisplaySettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Loads and validates display settings from a directory, falling back to
/// the defaults when no settings file is present.
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load_settings(dir: &Path) -> Result<DisplaySettings, ConfigError> {
    let settings = load_from_dir(dir)?.map_or_else(DisplaySettings::default, |loaded| {
        tracing::debug!("Loaded settings: {:?}", loaded);
        loaded
    });

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}
