pub mod args;
pub mod errors;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use errors::SettingsError;

pub const DEFAULT_TOOL: &str = "cmsis-dap";
pub const DEFAULT_START_ADDRESS: &str = "0x8000000";
pub const SYSTEM_OPENOCD_BIN: &str = "/usr/local/bin/openocd";
pub const SYSTEM_OPENOCD_ROOT: &str = "/usr/local/share/openocd";

/// User overridable settings. Every key is optional in the file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: Defaults,
    pub openocd: OpenOcdSettings,
    pub platformio: PlatformIoSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub tool: String,
    pub start_address: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            start_address: DEFAULT_START_ADDRESS.to_string(),
        }
    }
}

/// Well-known system install checked before the PlatformIO package cache.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OpenOcdSettings {
    pub bin: PathBuf,
    pub root: PathBuf,
}

impl Default for OpenOcdSettings {
    fn default() -> Self {
        Self {
            bin: PathBuf::from(SYSTEM_OPENOCD_BIN),
            root: PathBuf::from(SYSTEM_OPENOCD_ROOT),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformIoSettings {
    pub home: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileType {
    Toml,
    Yaml,
    Json,
}

impl FileType {
    fn from_path(path: &str) -> Result<Self, SettingsError> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(FileType::Toml),
            Some("yaml") | Some("yml") => Ok(FileType::Yaml),
            Some("json") => Ok(FileType::Json),
            _ => Err(SettingsError::UnsupportedFileType(path.to_string())),
        }
    }
}

impl Settings {
    /// Loads settings from `path` when given, otherwise returns the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file_type = FileType::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::FileError(format!("failed to open file {}: {}", path, e)))?;

        let settings = Self::parse(&content, file_type).map_err(|reason| {
            SettingsError::ParseError {
                file: path.to_string(),
                reason,
            }
        })?;
        log::debug!("loaded settings from {}", path);

        Ok(settings.expanded())
    }

    fn parse(content: &str, file_type: FileType) -> Result<Self, String> {
        match file_type {
            FileType::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            FileType::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            FileType::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn expanded(mut self) -> Self {
        self.openocd.bin = expand_home(&self.openocd.bin);
        self.openocd.root = expand_home(&self.openocd.root);
        self.platformio.home = self.platformio.home.as_deref().map(expand_home);
        self
    }
}

pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Replaces a leading `~` component with the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
