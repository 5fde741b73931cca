use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BOARD_SIZE: usize = 5;
pub const GRID_ROWS: usize = BOARD_SIZE - 1;
pub const GRID_COLS: usize = BOARD_SIZE - 1;
pub const WINDOW_WIDTH: i32 = 500;
pub const WINDOW_HEIGHT: i32 = 400;
pub const WINDOW_TITLE: &str = "Memory";
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_fps")]
    pub fps: u32,

    #[serde(default = "default_mismatch_delay_frames")]
    pub mismatch_delay_frames: u32,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

fn default_fps() -> u32 {
    60
}
fn default_mismatch_delay_frames() -> u32 {
    65
}
fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fps: default_fps(),
            mismatch_delay_frames: default_mismatch_delay_frames(),
            asset_dir: default_asset_dir(),
        }
    }
}

impl Settings {
    /// Reads the settings file if there is one, then applies environment overrides.
    /// Never writes anything back.
    pub fn load() -> Self {
        let mut settings = Self::load_from(&Self::settings_path());
        if let Some(asset_dir) = Self::asset_dir_from_env() {
            settings.asset_dir = asset_dir;
        }
        settings
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Settings::default();
        };
        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!(target: "settings", "Ignoring malformed {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if self.fps == 0 {
            warn!(target: "settings", "fps must be positive, using {}", default_fps());
            self.fps = default_fps();
        } else if self.fps > MAX_FPS {
            warn!(target: "settings", "fps {} is above the cap, using {}", self.fps, MAX_FPS);
            self.fps = MAX_FPS;
        }
        self
    }

    fn settings_path() -> PathBuf {
        let mut path = glib::user_data_dir().join("memory");
        path.push("settings.json");
        path
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.clamp(1, MAX_FPS) as f64)
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        let value = std::env::var("MEMORY_SEED").ok()?;
        match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(target: "settings", "MEMORY_SEED is not a u64: {:?}", value);
                None
            }
        }
    }

    fn asset_dir_from_env() -> Option<PathBuf> {
        std::env::var_os("MEMORY_ASSETS").map(PathBuf::from)
    }
}
