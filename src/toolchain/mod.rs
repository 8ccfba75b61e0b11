pub mod errors;

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::family::Family;
use crate::settings::{OpenOcdSettings, Settings, home_dir};
use errors::ToolchainError;

pub const OPENOCD_PACKAGE: &str = "tool-openocd";
pub const OPENOCD_EXECUTABLE: &str = "openocd";
pub const ESPTOOL_PACKAGE: &str = "tool-esptoolpy";
pub const ESPTOOL_SCRIPT: &str = "esptool.py";
pub const PLATFORMIO_CORE_DIR_ENV: &str = "PLATFORMIO_CORE_DIR";

/// A resolved openocd install: the executable and the data root holding `scripts/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOcd {
    pub bin: PathBuf,
    pub root: PathBuf,
}

impl OpenOcd {
    pub fn interface_config(&self, tool: &str) -> PathBuf {
        self.root
            .join("scripts")
            .join("interface")
            .join(format!("{tool}.cfg"))
    }

    pub fn target_config(&self, family: &Family) -> PathBuf {
        self.root
            .join("scripts")
            .join("target")
            .join(family.config_file())
    }
}

/// A resolved esptool: either PlatformIO's bundled interpreter + script, or a
/// standalone `esptool.py` found on PATH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Esptool {
    pub interpreter: Option<PathBuf>,
    pub script: PathBuf,
}

impl Esptool {
    /// Program to spawn followed by the arguments that must precede esptool's own.
    pub fn invocation(&self) -> (PathBuf, Vec<OsString>) {
        match &self.interpreter {
            Some(python) => (python.clone(), vec![self.script.clone().into_os_string()]),
            None => (self.script.clone(), Vec::new()),
        }
    }
}

/// Locates external flashing tools. Nothing is cached; every lookup checks the filesystem.
#[derive(Debug, Clone)]
pub struct Toolchain {
    system_openocd: OpenOcdSettings,
    platformio_home: Option<PathBuf>,
    search_path: Option<OsString>,
}

impl Toolchain {
    pub fn new(
        system_openocd: OpenOcdSettings,
        platformio_home: Option<PathBuf>,
        search_path: Option<OsString>,
    ) -> Self {
        Self {
            system_openocd,
            platformio_home,
            search_path,
        }
    }

    /// Builds a locator from settings and the process environment.
    pub fn from_settings(settings: &Settings) -> Self {
        let platformio_home = settings
            .platformio
            .home
            .clone()
            .or_else(|| {
                env::var_os(PLATFORMIO_CORE_DIR_ENV)
                    .filter(|d| !d.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| home_dir().map(|h| h.join(".platformio")));

        Self::new(
            settings.openocd.clone(),
            platformio_home,
            env::var_os("PATH"),
        )
    }

    pub fn platformio_home(&self) -> Result<&Path, ToolchainError> {
        self.platformio_home
            .as_deref()
            .ok_or(ToolchainError::HomeNotFound)
    }

    /// Installation root of a PlatformIO package.
    pub fn package_path(&self, package: &str) -> Result<PathBuf, ToolchainError> {
        let path = self.platformio_home()?.join("packages").join(package);
        if !path.exists() {
            return Err(ToolchainError::PackageNotFound(package.to_string()));
        }
        Ok(path)
    }

    pub fn package_bin_path(
        &self,
        package: &str,
        executable: &str,
    ) -> Result<PathBuf, ToolchainError> {
        let bin_path = self.package_path(package)?.join("bin").join(executable);
        if !bin_path.exists() {
            return Err(ToolchainError::ExecutableNotFound {
                package: package.to_string(),
                executable: executable.to_string(),
            });
        }
        Ok(bin_path)
    }

    pub fn openocd(&self) -> Result<OpenOcd, ToolchainError> {
        let system = &self.system_openocd;
        if system.bin.exists() && system.root.exists() {
            log::info!("using system openocd at {}", system.bin.display());
            return Ok(OpenOcd {
                bin: system.bin.clone(),
                root: system.root.clone(),
            });
        }

        let bin = self.package_bin_path(OPENOCD_PACKAGE, OPENOCD_EXECUTABLE)?;
        let package = self.package_path(OPENOCD_PACKAGE)?;

        // PlatformIO ships the script library under `openocd/scripts`.
        let nested = package.join("openocd");
        let root = if nested.join("scripts").is_dir() {
            nested
        } else {
            package
        };
        log::info!("using PlatformIO openocd at {}", bin.display());

        Ok(OpenOcd { bin, root })
    }

    pub fn esptool(&self) -> Result<Esptool, ToolchainError> {
        if let Some(bundled) = self.bundled_esptool() {
            log::info!("using PlatformIO esptool at {}", bundled.script.display());
            return Ok(bundled);
        }

        let script = self.which(ESPTOOL_SCRIPT)?;
        log::info!("using esptool from PATH at {}", script.display());
        Ok(Esptool {
            interpreter: None,
            script,
        })
    }

    fn bundled_esptool(&self) -> Option<Esptool> {
        let home = self.platformio_home().ok()?;
        let script = home
            .join("packages")
            .join(ESPTOOL_PACKAGE)
            .join(ESPTOOL_SCRIPT);
        let python = home.join("penv").join("bin").join("python");

        if script.is_file() && python.exists() {
            Some(Esptool {
                interpreter: Some(python),
                script,
            })
        } else {
            log::debug!("no bundled esptool under {}", home.display());
            None
        }
    }

    /// First executable file named `executable` in the search path.
    pub fn which(&self, executable: &str) -> Result<PathBuf, ToolchainError> {
        let search_path = self.search_path.as_deref().unwrap_or(OsStr::new(""));
        search_dirs(search_path)
            .into_iter()
            .map(|dir| dir.join(executable))
            .find(|candidate| is_executable(candidate))
            .ok_or_else(|| ToolchainError::NotOnPath(executable.to_string()))
    }
}

// An empty entry in a non-empty PATH names the current directory.
fn search_dirs(search_path: &OsStr) -> Vec<PathBuf> {
    if search_path.is_empty() {
        return Vec::new();
    }
    env::split_paths(search_path)
        .map(|dir| {
            if dir.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                dir
            }
        })
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
