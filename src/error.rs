use std::io;

use thiserror::Error;

use crate::settings::errors::SettingsError;
use crate::toolchain::errors::ToolchainError;

#[derive(Debug, Error)]
pub enum FlashError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    #[error("firmware {0} does not exist")]
    FirmwareNotFound(String),

    #[error("mcu {0} is not supported")]
    UnsupportedMcu(String),

    #[error("unknown firmware {0}, expected .bin, .elf or .hex")]
    UnsupportedFirmwareFormat(String),

    #[error("need {option}: {hint}")]
    MissingRequiredOption {
        option: &'static str,
        hint: &'static str,
    },

    #[error("port {0} does not exist")]
    PortNotFound(String),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {}", describe_code(.code))]
    ChildProcessFailure { program: String, code: Option<i32> },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl FlashError {
    /// Process exit status for this error. A failed child passes its own status through.
    pub fn exit_code(&self) -> u8 {
        match self {
            FlashError::ChildProcessFailure {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}
