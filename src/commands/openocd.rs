use std::path::Path;

use super::FlashCommand;
use crate::error::FlashError;
use crate::family::{self, Family};
use crate::firmware::FirmwareFormat;
use crate::request::InvocationRequest;
use crate::toolchain::{OpenOcd, Toolchain};

/// Resolves family, firmware format and openocd install, in that order.
pub fn build(
    request: &InvocationRequest,
    toolchain: &Toolchain,
) -> Result<FlashCommand, FlashError> {
    let family = family::classify(request.mcu())
        .ok_or_else(|| FlashError::UnsupportedMcu(request.mcu().to_string()))?;
    log::info!("tool using {}", request.tool());
    log::info!("detected family {}", family.name());

    let format = FirmwareFormat::from_path(request.firmware_path())?;
    let openocd = toolchain.openocd()?;

    Ok(command(
        &openocd,
        &family,
        request.tool(),
        request.firmware_path(),
        format,
        request.start_address(),
    ))
}

pub fn command(
    openocd: &OpenOcd,
    family: &Family,
    tool: &str,
    firmware: &Path,
    format: FirmwareFormat,
    start_address: &str,
) -> FlashCommand {
    let interface = openocd.interface_config(tool);
    let target = openocd.target_config(family);
    for cfg in [&interface, &target] {
        if !cfg.exists() {
            log::warn!("openocd config {} not found", cfg.display());
        }
    }

    FlashCommand::new(&openocd.bin)
        .arg("-f")
        .arg(interface)
        .arg("-f")
        .arg(target)
        .arg("-c")
        .arg(program_script(firmware, format, start_address))
}

/// The openocd `program` command for a firmware image.
pub fn program_script(firmware: &Path, format: FirmwareFormat, start_address: &str) -> String {
    let firmware = firmware.display();
    if format.is_self_describing() {
        format!("program {firmware} verify reset exit")
    } else {
        format!("program {firmware} exit {start_address}")
    }
}
