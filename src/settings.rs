//! Game settings and preferences
//!
//! Persisted in LocalStorage on wasm; plain defaults elsewhere.

use serde::{Deserialize, Serialize};

/// Game configuration
///
/// The two cadences are part of the observable contract - they set the
/// game's difficulty and feel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Obstacle spawn cadence in milliseconds
    pub spawn_interval_ms: f32,
    /// Collision detection cadence in milliseconds
    pub detection_interval_ms: f32,
    /// Viewport width in CSS pixels (spawn edge geometry)
    pub viewport_w: f32,
    /// Viewport height in CSS pixels
    pub viewport_h: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 800.0,
            detection_interval_ms: 100.0,
            viewport_w: 1320.0,
            viewport_h: 646.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "planet_defender_settings";

    /// Measured viewport dimensions, keeping everything else as stored
    pub fn with_viewport(mut self, w: f32, h: f32) -> Self {
        self.viewport_w = w;
        self.viewport_h = h;
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cadences() {
        let s = Settings::default();
        assert_eq!(s.spawn_interval_ms, 800.0);
        assert_eq!(s.detection_interval_ms, 100.0);
    }

    #[test]
    fn test_settings_roundtrip() {
        let s = Settings::default().with_viewport(1920.0, 1080.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.viewport_w, 1920.0);
        assert_eq!(back.viewport_h, 1080.0);
        assert_eq!(back.spawn_interval_ms, s.spawn_interval_ms);
    }
}
