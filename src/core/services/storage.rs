//! Browser local storage for the session token and client settings.

use web_sys::Storage;

use super::session::{AuthToken, Session};
use crate::core::config::AppConfig;

const TOKEN_KEY: &str = "token";
const SETTINGS_KEY: &str = "taskboard.settings";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn write(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                tracing::error!("Failed to write {} to local storage", key);
            }
        }
        None => tracing::error!("Local storage unavailable, {} not saved", key),
    }
}

// Load the persisted session, if any
pub fn load_session() -> Session {
    Session::from_stored(read(TOKEN_KEY))
}

pub fn save_session(token: &AuthToken) {
    write(TOKEN_KEY, token.as_str());
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

pub fn load_settings() -> AppConfig {
    AppConfig::from_stored(read(SETTINGS_KEY).as_deref())
}

pub fn save_settings(config: &AppConfig) {
    write(SETTINGS_KEY, &config.to_json());
    tracing::info!("Settings saved");
}
