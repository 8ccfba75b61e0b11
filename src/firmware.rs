use std::path::Path;

use crate::error::FlashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareFormat {
    /// Raw image, needs an explicit load address.
    Bin,
    Elf,
    Hex,
}

impl FirmwareFormat {
    /// Detects the format from the file name's suffix, ignoring ASCII case.
    pub fn from_path(path: &Path) -> Result<Self, FlashError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".bin") {
            Ok(FirmwareFormat::Bin)
        } else if name.ends_with(".elf") {
            Ok(FirmwareFormat::Elf)
        } else if name.ends_with(".hex") {
            Ok(FirmwareFormat::Hex)
        } else {
            Err(FlashError::UnsupportedFirmwareFormat(
                path.display().to_string(),
            ))
        }
    }

    /// Whether the file carries its own load addresses.
    pub fn is_self_describing(&self) -> bool {
        !matches!(self, FirmwareFormat::Bin)
    }
}
