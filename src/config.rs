//! Configuration for radix-edit
//!
//! Property-based configuration with JSON persistence.
//! Keys are dotted names such as `field.displayMode`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::display_mode::DisplayMode;
use crate::error::{ConfigError, ConfigResult};

pub const KEY_DISPLAY_MODE: &str = "field.displayMode";
pub const KEY_INITIAL_VALUE: &str = "field.initialValue";
pub const KEY_CLIPBOARD_SHORTCUTS: &str = "keyboard.clipboardShortcuts";
pub const KEY_WINDOW_WIDTH: &str = "window.width";
pub const KEY_WINDOW_HEIGHT: &str = "window.height";

/// Largest accepted window width or height, in points
const MAX_WINDOW_DIMENSION: i64 = 16_384;

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV_VAR: &str = "RADIX_EDIT_CONFIG";

/// Supported configuration value types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl ConfigValue {
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<DisplayMode> for ConfigValue {
    fn from(value: DisplayMode) -> Self {
        ConfigValue::String(value.as_str().to_string())
    }
}

pub struct FieldConfig {
    properties: HashMap<String, ConfigValue>,
    config_resource: String,
}

impl FieldConfig {
    /// Create a configuration with default values, persisted at `config_resource`
    pub fn new(config_resource: String) -> Self {
        let mut config = Self {
            properties: HashMap::new(),
            config_resource,
        };

        config.set_defaults();
        config
    }

    fn set_defaults(&mut self) {
        self.properties.insert(KEY_DISPLAY_MODE.to_string(), DisplayMode::Decimal.into());
        self.properties.insert(KEY_CLIPBOARD_SHORTCUTS.to_string(), true.into());
        self.properties.insert(KEY_WINDOW_WIDTH.to_string(), 360i64.into());
        self.properties.insert(KEY_WINDOW_HEIGHT.to_string(), 160i64.into());
        // field.initialValue is absent unless configured
    }

    pub fn get_boolean_property(&self, key: &str) -> Option<bool> {
        self.properties.get(key).and_then(|v| v.as_boolean())
    }

    pub fn get_boolean_property_or(&self, key: &str, default: bool) -> bool {
        self.get_boolean_property(key).unwrap_or(default)
    }

    /// Display mode the field starts in
    pub fn display_mode(&self) -> ConfigResult<DisplayMode> {
        match self.properties.get(KEY_DISPLAY_MODE) {
            None => Ok(DisplayMode::default()),
            Some(ConfigValue::String(name)) => name.parse().map_err(|_| ConfigError::InvalidParameter {
                parameter: KEY_DISPLAY_MODE.to_string(),
                value: name.clone(),
                reason: "expected one of decimal, hex, octal, binary".to_string(),
            }),
            Some(other) => Err(ConfigError::InvalidParameter {
                parameter: KEY_DISPLAY_MODE.to_string(),
                value: format!("{other:?}"),
                reason: "expected a string".to_string(),
            }),
        }
    }

    /// Value the field starts with, if one is configured
    pub fn initial_value(&self) -> ConfigResult<Option<i64>> {
        match self.properties.get(KEY_INITIAL_VALUE) {
            None => Ok(None),
            Some(ConfigValue::Integer(v)) => Ok(Some(*v)),
            Some(other) => Err(ConfigError::InvalidParameter {
                parameter: KEY_INITIAL_VALUE.to_string(),
                value: format!("{other:?}"),
                reason: "expected an integer".to_string(),
            }),
        }
    }

    pub fn clipboard_shortcuts_enabled(&self) -> bool {
        self.get_boolean_property_or(KEY_CLIPBOARD_SHORTCUTS, true)
    }

    /// Initial window size as `[width, height]`
    pub fn window_size(&self) -> ConfigResult<[f32; 2]> {
        Ok([
            self.window_dimension(KEY_WINDOW_WIDTH, 360)?,
            self.window_dimension(KEY_WINDOW_HEIGHT, 160)?,
        ])
    }

    fn window_dimension(&self, key: &str, default: i64) -> ConfigResult<f32> {
        match self.properties.get(key) {
            None => Ok(default as f32),
            Some(ConfigValue::Integer(v)) if (1..=MAX_WINDOW_DIMENSION).contains(v) => Ok(*v as f32),
            Some(other) => Err(ConfigError::InvalidParameter {
                parameter: key.to_string(),
                value: format!("{other:?}"),
                reason: format!("expected an integer between 1 and {MAX_WINDOW_DIMENSION}"),
            }),
        }
    }

    pub fn set_property<T: Into<ConfigValue>>(&mut self, key: &str, value: T) {
        self.properties.insert(key.to_string(), value.into());
    }

    pub fn get_config_resource(&self) -> &str {
        &self.config_resource
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.properties)
    }

    /// Load configuration from JSON over the current values
    pub fn from_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let loaded: HashMap<String, ConfigValue> = serde_json::from_str(json)?;
        for (key, value) in loaded {
            self.set_property(&key, value);
        }
        Ok(())
    }
}

/// Thread-safe configuration wrapper
pub type SharedFieldConfig = Arc<Mutex<FieldConfig>>;

pub fn create_shared_config(config_resource: String) -> SharedFieldConfig {
    Arc::new(Mutex::new(FieldConfig::new(config_resource)))
}

/// Platform-appropriate configuration file path.
///
/// `RADIX_EDIT_CONFIG` wins, then the platform config directory, then
/// `radix-edit.json` in the working directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(p) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(p);
    }

    match dirs::config_dir() {
        Some(base) => base.join("radix-edit").join("config.json"),
        None => PathBuf::from("radix-edit.json"),
    }
}

/// Load the configuration from the default path.
pub fn load_shared_config() -> SharedFieldConfig {
    load_shared_config_from(&default_config_path())
}

/// Load the configuration at `path`, falling back to defaults when the
/// file is missing or unreadable.
pub fn load_shared_config_from(path: &Path) -> SharedFieldConfig {
    let shared = create_shared_config(path.to_string_lossy().to_string());
    if !path.exists() {
        return shared;
    }

    let buf = match fs::read_to_string(path) {
        Ok(buf) => buf,
        Err(e) => {
            warn!("Failed to read config file {}: {e}", path.display());
            return shared;
        }
    };

    if let Ok(mut cfg) = shared.lock() {
        if let Err(e) = cfg.from_json(&buf) {
            warn!("Failed to parse config file {}: {e}", path.display());
        }
    }

    shared
}

/// Save the shared configuration to its `config_resource` path.
pub fn save_shared_config(shared: &SharedFieldConfig) -> ConfigResult<()> {
    let (path_str, json) = {
        let cfg = shared.lock().map_err(|_| ConfigError::FileError {
            path: "<shared>".to_string(),
            error: "configuration lock poisoned".to_string(),
        })?;
        let json = cfg.to_json().map_err(|e| ConfigError::FileError {
            path: cfg.get_config_resource().to_string(),
            error: e.to_string(),
        })?;
        (cfg.get_config_resource().to_string(), json)
    };

    let file_error = |e: std::io::Error| ConfigError::FileError {
        path: path_str.clone(),
        error: e.to_string(),
    };

    let path = PathBuf::from(&path_str);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(file_error)?;
        }
    }
    fs::write(&path, json).map_err(file_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FieldConfig::new("test.json".to_string());
        assert_eq!(config.display_mode().unwrap(), DisplayMode::Decimal);
        assert_eq!(config.initial_value().unwrap(), None);
        assert!(config.clipboard_shortcuts_enabled());
        assert_eq!(config.window_size().unwrap(), [360.0, 160.0]);
        assert_eq!(config.get_config_resource(), "test.json");
    }

    #[test]
    fn test_typed_accessors() {
        let mut config = FieldConfig::new("test.json".to_string());
        config.set_property(KEY_DISPLAY_MODE, DisplayMode::Octal);
        config.set_property(KEY_INITIAL_VALUE, 511i64);
        assert_eq!(config.display_mode().unwrap(), DisplayMode::Octal);
        assert_eq!(config.initial_value().unwrap(), Some(511));
    }

    #[test]
    fn test_invalid_display_mode() {
        let mut config = FieldConfig::new("test.json".to_string());
        config.set_property(KEY_DISPLAY_MODE, "base64");
        assert!(matches!(
            config.display_mode(),
            Err(ConfigError::InvalidParameter { .. })
        ));

        config.set_property(KEY_DISPLAY_MODE, 16i64);
        assert!(config.display_mode().is_err());

        config.set_property(KEY_INITIAL_VALUE, "ten");
        assert!(config.initial_value().is_err());
    }

    #[test]
    fn test_window_size_must_be_positive() {
        let mut config = FieldConfig::new("test.json".to_string());
        config.set_property(KEY_WINDOW_WIDTH, 640i64);
        assert_eq!(config.window_size().unwrap(), [640.0, 160.0]);

        config.set_property(KEY_WINDOW_HEIGHT, 0i64);
        assert!(matches!(
            config.window_size(),
            Err(ConfigError::InvalidParameter { parameter, .. }) if parameter == KEY_WINDOW_HEIGHT
        ));

        config.set_property(KEY_WINDOW_HEIGHT, 200i64);
        config.set_property(KEY_WINDOW_WIDTH, -360i64);
        assert!(config.window_size().is_err());

        config.set_property(KEY_WINDOW_WIDTH, "wide");
        assert!(config.window_size().is_err());
    }

    #[test]
    fn test_serialization() {
        let mut config = FieldConfig::new("test.json".to_string());
        config.set_property(KEY_DISPLAY_MODE, DisplayMode::Hexadecimal);
        config.set_property(KEY_INITIAL_VALUE, 4096i64);

        let json = config.to_json().expect("Serialization should work");
        assert!(json.contains(KEY_DISPLAY_MODE));

        let mut restored = FieldConfig::new("other.json".to_string());
        restored.from_json(&json).expect("Deserialization should work");
        assert_eq!(restored.display_mode().unwrap(), DisplayMode::Hexadecimal);
        assert_eq!(restored.initial_value().unwrap(), Some(4096));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let shared = create_shared_config(path.to_string_lossy().to_string());
        shared.lock().unwrap().set_property(KEY_DISPLAY_MODE, DisplayMode::Binary);
        save_shared_config(&shared).unwrap();

        let loaded = load_shared_config_from(&path);
        assert_eq!(loaded.lock().unwrap().display_mode().unwrap(), DisplayMode::Binary);
    }

    #[test]
    fn test_load_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_shared_config_from(&dir.path().join("absent.json"));
        assert_eq!(missing.lock().unwrap().display_mode().unwrap(), DisplayMode::Decimal);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        let loaded = load_shared_config_from(&bad);
        assert_eq!(loaded.lock().unwrap().display_mode().unwrap(), DisplayMode::Decimal);
    }
}
