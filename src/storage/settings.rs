/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! Dashboard settings documents
//!
//! Two small JSON files live in the data directory: the general UI settings
//! (layout, theme, default order type) and the telegram notification
//! settings. Loading never fails; a missing or corrupt file reads as the
//! defaults. Saving overwrites the whole document atomically.

use crate::error::AppError;
use crate::storage::utils::{read_json_object, write_json_atomic};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the general settings document
pub const GENERAL_SETTINGS_FILE: &str = "general_settings.json";
/// File name of the telegram settings document
pub const TELEGRAM_SETTINGS_FILE: &str = "telegram_settings.json";

/// Defaults of the general settings document
#[must_use]
pub fn general_defaults() -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert("layout".to_string(), json!("layout3"));
    defaults.insert("theme".to_string(), json!("dark"));
    defaults.insert("order_default_market".to_string(), json!(true));
    defaults
}

/// Telegram notification settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TelegramSettings {
    /// Whether notifications are sent
    pub enabled: bool,
    /// Bot token
    pub token: String,
    /// Target chat id
    pub chat_id: String,
}

impl TelegramSettings {
    /// Builds settings from an arbitrary payload
    ///
    /// Only the three known keys are read. `enabled` follows JSON truthiness;
    /// the other two are rendered as strings, with null or missing meaning empty.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let Value::Object(map) = payload else {
            return Self::default();
        };
        Self {
            enabled: map.get("enabled").is_some_and(is_truthy),
            token: map.get("token").map(as_setting_string).unwrap_or_default(),
            chat_id: map.get("chat_id").map(as_setting_string).unwrap_or_default(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn as_setting_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other if !is_truthy(other) => String::new(),
        other => other.to_string(),
    }
}

fn with_defaults(mut data: Map<String, Value>, defaults: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in defaults {
        data.entry(key).or_insert(value);
    }
    data
}

fn telegram_defaults() -> Map<String, Value> {
    match serde_json::to_value(TelegramSettings::default()) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// JSON file store of the dashboard settings
#[derive(Debug, Clone)]
pub struct SettingsStore {
    data_dir: PathBuf,
}

impl SettingsStore {
    /// Creates a store over `data_dir` without touching the filesystem
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates a store and makes sure its directory exists
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = Self::new(data_dir);
        tokio::fs::create_dir_all(&store.data_dir).await?;
        info!("Settings stored in {}", store.data_dir.display());
        Ok(store)
    }

    /// Directory holding the documents
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the general settings document
    #[must_use]
    pub fn general_path(&self) -> PathBuf {
        self.data_dir.join(GENERAL_SETTINGS_FILE)
    }

    /// Path of the telegram settings document
    #[must_use]
    pub fn telegram_path(&self) -> PathBuf {
        self.data_dir.join(TELEGRAM_SETTINGS_FILE)
    }

    /// Loads the general settings, filling in missing defaults
    pub async fn load_general(&self) -> Map<String, Value> {
        match read_json_object(&self.general_path()).await {
            Some(data) => with_defaults(data, general_defaults()),
            None => general_defaults(),
        }
    }

    /// Saves `payload` over the defaults; keys unknown to the defaults are kept
    ///
    /// A payload that is not an object saves the defaults.
    pub async fn save_general(&self, payload: &Value) -> Result<Map<String, Value>, AppError> {
        let mut data = general_defaults();
        if let Value::Object(map) = payload {
            data.extend(map.clone());
        }
        write_json_atomic(&self.general_path(), &data).await?;
        debug!("General settings saved ({} keys)", data.len());
        Ok(data)
    }

    /// Loads the telegram settings, filling in missing defaults
    pub async fn load_telegram(&self) -> Map<String, Value> {
        match read_json_object(&self.telegram_path()).await {
            Some(data) => with_defaults(data, telegram_defaults()),
            None => telegram_defaults(),
        }
    }

    /// Saves the three telegram keys found in `payload`, dropping everything else
    pub async fn save_telegram(&self, payload: &Value) -> Result<TelegramSettings, AppError> {
        let settings = TelegramSettings::from_payload(payload);
        write_json_atomic(&self.telegram_path(), &settings).await?;
        debug!("Telegram settings saved (enabled: {})", settings.enabled);
        Ok(settings)
    }
}
