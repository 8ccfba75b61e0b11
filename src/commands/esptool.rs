use std::path::Path;

use super::FlashCommand;
use crate::error::FlashError;
use crate::request::InvocationRequest;
use crate::toolchain::{Esptool, Toolchain};

/// The port is checked before esptool is looked up.
pub fn build(
    request: &InvocationRequest,
    toolchain: &Toolchain,
) -> Result<FlashCommand, FlashError> {
    let port = request
        .port()
        .ok_or(FlashError::MissingRequiredOption {
            option: "port",
            hint: "--port /dev/ttyACM0",
        })?;
    if !port.exists() {
        return Err(FlashError::PortNotFound(port.display().to_string()));
    }

    let esptool = toolchain.esptool()?;
    Ok(command(&esptool, request.mcu(), port, request.firmware_path()))
}

pub fn command(esptool: &Esptool, chip: &str, port: &Path, firmware: &Path) -> FlashCommand {
    let (program, leading) = esptool.invocation();

    FlashCommand::new(program)
        .args(leading)
        .arg(format!("--chip={chip}"))
        .arg(format!("--port={}", port.display()))
        .arg("write_flash")
        .arg("--flash_size=detect")
        .arg("0")
        .arg(firmware)
}
