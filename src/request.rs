use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::error::FlashError;
use crate::settings::Defaults;

/// Everything needed to flash one firmware image, fixed once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    mcu: String,
    firmware_path: PathBuf,
    tool: String,
    start_address: String,
    port: Option<PathBuf>,
    dry_run: bool,
}

impl InvocationRequest {
    /// Merges CLI arguments over the configured defaults.
    pub fn new(args: &Args, defaults: &Defaults) -> Self {
        Self {
            mcu: args.mcu.to_ascii_lowercase(),
            firmware_path: PathBuf::from(&args.firmware),
            tool: args
                .openocd
                .tool
                .clone()
                .unwrap_or_else(|| defaults.tool.clone()),
            start_address: args
                .openocd
                .start
                .clone()
                .unwrap_or_else(|| defaults.start_address.clone()),
            port: args.esptool.port.as_ref().map(PathBuf::from),
            dry_run: args.dryrun,
        }
    }

    /// Fails unless the firmware image exists on disk.
    pub fn ensure_firmware_exists(&self) -> Result<(), FlashError> {
        if self.firmware_path.exists() {
            Ok(())
        } else {
            Err(FlashError::FirmwareNotFound(
                self.firmware_path.display().to_string(),
            ))
        }
    }

    /// Lowercased MCU name.
    pub fn mcu(&self) -> &str {
        &self.mcu
    }

    pub fn firmware_path(&self) -> &Path {
        &self.firmware_path
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn start_address(&self) -> &str {
        &self.start_address
    }

    pub fn port(&self) -> Option<&Path> {
        self.port.as_deref()
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
