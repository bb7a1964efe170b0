use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_weekday_lang")]
    pub weekday_lang: String,
    #[serde(default = "default_use_color")]
    pub use_color: bool,
    #[serde(default = "default_show_overlays")]
    pub show_overlays: bool,
    /// Month opened by `koyomi month` when no period is given
    /// (YYYY-MM, empty = current month).
    #[serde(default)]
    pub default_period: String,
}

fn default_weekday_lang() -> String {
    "ja".to_string()
}
fn default_use_color() -> bool {
    true
}
fn default_show_overlays() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekday_lang: default_weekday_lang(),
            use_color: default_use_color(),
            show_overlays: default_show_overlays(),
            default_period: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("koyomi")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".koyomi")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("koyomi.conf")
    }

    /// Load configuration from file, or return defaults if not found
    /// (or unreadable; a broken config never blocks the calendar).
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    crate::ui::messages::warning(format!(
                        "Ignoring malformed config {}: {}",
                        path.display(),
                        e
                    ));
                    Config::default()
                }),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Write the current configuration to disk, creating the directory.
    pub fn save(&self) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
