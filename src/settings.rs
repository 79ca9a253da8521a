//! Per-user overlay preferences (window placement, opacity, hotkeys).
//!
//! Stored as JSON next to the executable or in the user's profile directory.
//! A missing or unreadable file is never fatal: the overlay starts with
//! defaults and writes a fresh file on the next save.

use crate::hotkey::{Hotkey, HotkeyError};
use fs2::FileExt;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hotkey for {action}: {source}")]
    Hotkey {
        action: &'static str,
        #[source]
        source: HotkeyError,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 480,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HotkeyBindings {
    pub toggle_visibility: String,
    pub toggle_click_through: String,
    pub reload: String,
}

impl Default for HotkeyBindings {
    fn default() -> Self {
        Self {
            toggle_visibility: "Ctrl+Shift+O".to_string(),
            toggle_click_through: "Ctrl+Shift+C".to_string(),
            reload: "Ctrl+Shift+R".to_string(),
        }
    }
}

impl HotkeyBindings {
    /// Parse every binding, labelled by action, in a stable order.
    pub fn parsed(&self) -> Result<Vec<(&'static str, Hotkey)>, SettingsError> {
        let entries = [
            ("toggle_visibility", &self.toggle_visibility),
            ("toggle_click_through", &self.toggle_click_through),
            ("reload", &self.reload),
        ];
        entries
            .into_iter()
            .map(|(action, raw)| {
                raw.parse::<Hotkey>()
                    .map(|hk| (action, hk))
                    .map_err(|source| SettingsError::Hotkey { action, source })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub window: WindowGeometry,
    pub opacity: f32,
    pub always_on_top: bool,
    pub click_through: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_url: Option<String>,
    pub hotkeys: HotkeyBindings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            window: WindowGeometry::default(),
            opacity: 0.9,
            always_on_top: true,
            click_through: false,
            last_url: None,
            hotkeys: HotkeyBindings::default(),
        }
    }
}

impl UserSettings {
    /// Load settings, falling back to defaults when the file is absent or corrupt.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let mut settings: UserSettings = serde_json::from_str(&contents)?;
        settings.opacity = settings.opacity.clamp(0.1, 1.0);
        Ok(settings)
    }

    /// Persist atomically: lock a sibling `.lock` file, write a temp file in
    /// the same directory, then rename it over the target. The temp file is
    /// removed on any failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let _lock = lock_sibling(path, dir)?;
        let mut tmp = tempfile::Builder::new()
            .prefix(".settings.")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        if let Err(e) = tmp.as_file().sync_all() {
            debug!("fsync of {} failed: {}", tmp.path().display(), e);
        }
        tmp.persist(path).map_err(|e| e.error)?;

        if let Ok(dir_file) = File::open(dir) {
            let _ = dir_file.sync_all();
        }
        Ok(())
    }
}

/// Exclusive lock held for as long as the returned handle lives.
fn lock_sibling(path: &Path, dir: &Path) -> Result<File, SettingsError> {
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("settings.json");
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(dir.join(format!(".{}.lock", base)))?;
    lock_file.lock_exclusive()?;
    Ok(lock_file)
}
