/// Dashboard settings documents
pub mod settings;
/// JSON file helpers
pub mod utils;

pub use settings::{SettingsStore, TelegramSettings};
