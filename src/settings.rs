use serde::Deserialize;

use crate::error::PlayerError;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "rustyreel.player_settings";

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";

const DEFAULT_SOURCE: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

/// Player settings read once at startup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default = "default_speed_options")]
    pub speed_options: Vec<f64>,
    #[serde(default = "default_initial_speed")]
    pub initial_speed: f64,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_speed_options() -> Vec<f64> {
    vec![0.5, 0.75, 1.0, 1.5, 2.0]
}

fn default_initial_speed() -> f64 {
    1.0
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            poster: None,
            speed_options: default_speed_options(),
            initial_speed: default_initial_speed(),
        }
    }
}

impl PlayerSettings {
    /// Drop speeds the media element would reject and keep the initial
    /// speed selectable.
    fn normalized(mut self) -> Self {
        self.speed_options
            .retain(|speed| speed.is_finite() && *speed > 0.0);
        if self.speed_options.is_empty() {
            self.speed_options = default_speed_options();
        }
        if !self.speed_options.contains(&self.initial_speed) {
            self.initial_speed = if self.speed_options.contains(&1.0) {
                1.0
            } else {
                self.speed_options[0]
            };
        }
        self
    }
}

pub fn parse_settings(json: &str) -> Result<PlayerSettings, PlayerError> {
    serde_json::from_str::<PlayerSettings>(json)
        .map(PlayerSettings::normalized)
        .map_err(|e| PlayerError::Settings(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn read_stored_settings() -> Result<Option<String>, PlayerError> {
    match LocalStorage::raw().get_item(SETTINGS_KEY) {
        Ok(value) => Ok(value),
        Err(_) => Err(PlayerError::Settings("local storage unavailable".into())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_stored_settings() -> Result<Option<String>, PlayerError> {
    let Some(dir) = dirs::config_dir() else {
        return Ok(None);
    };
    let path = dir.join("rustyreel").join(SETTINGS_FILE);
    match std::fs::read_to_string(&path) {
        Ok(json) => Ok(Some(json)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(PlayerError::Settings(format!(
            "failed to read {}: {err}",
            path.display()
        ))),
    }
}

/// Load settings, falling back to defaults when none are stored or they are unreadable.
pub fn load_settings() -> PlayerSettings {
    let stored = read_stored_settings().and_then(|json| json.map(|j| parse_settings(&j)).transpose());
    match stored {
        Ok(Some(settings)) => settings,
        Ok(None) => PlayerSettings::default(),
        Err(err) => {
            tracing::warn!("{err}; using default player settings");
            PlayerSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = parse_settings(r#"{"source": "clip.webm"}"#).unwrap();
        assert_eq!(settings.source, "clip.webm");
        assert_eq!(settings.poster, None);
        assert_eq!(settings.speed_options, vec![0.5, 0.75, 1.0, 1.5, 2.0]);
        assert_eq!(settings.initial_speed, 1.0);
    }

    #[test]
    fn invalid_speeds_are_dropped() {
        let settings =
            parse_settings(r#"{"speed_options": [0, -1, 1.25, 3], "initial_speed": 5}"#).unwrap();
        assert_eq!(settings.speed_options, vec![1.25, 3.0]);
        assert_eq!(settings.initial_speed, 1.25);

        let settings = parse_settings(r#"{"speed_options": []}"#).unwrap();
        assert_eq!(settings.speed_options, default_speed_options());
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = parse_settings("{not json").unwrap_err();
        assert!(matches!(err, PlayerError::Settings(_)));
    }
}
