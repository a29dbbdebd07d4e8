//! Runtime settings, optionally overridden from local storage.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Local storage key holding a JSON [`GameConfig`].
pub const CONFIG_STORAGE_KEY: &str = "ttt_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one cell in canvas pixels.
    pub cell_size: f64,
    /// Thinking pause before the computer plays.
    pub computer_delay_ms: i32,
    pub line_color: String,
    pub mark_color: String,
    pub highlight_color: String,
    pub font: String,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            computer_delay_ms: 500,
            line_color: "#DB7093FF".into(),
            mark_color: "#DB7093FF".into(),
            highlight_color: "blue".into(),
            font: "48px Arial".into(),
            log_level: "info".into(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        Ok(cfg.validated())
    }

    /// Replaces out-of-range numbers with defaults.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            self.cell_size = defaults.cell_size;
        }
        if self.computer_delay_ms < 0 {
            self.computer_delay_ms = defaults.computer_delay_ms;
        }
        self
    }

    /// Canvas edge length for the whole 3x3 grid.
    pub fn board_px(&self) -> u32 {
        (self.cell_size * 3.0).round() as u32
    }

    /// Reads the stored config. Absent storage or key yields the defaults.
    pub fn load() -> Result<Self, AppError> {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
